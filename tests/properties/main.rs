//! Property test suite entry point.

mod invariant_tests;
mod roundtrip_tests;
mod safety_tests;
