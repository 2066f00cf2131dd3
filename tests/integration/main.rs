//! Integration test suite entry point.

mod roster_tests;
mod simulation_tests;
