//! Multi-learner roster.
//!
//! The catalog side of the crate is immutable and freely shared; the
//! mutable side is one `StudentProgression` per learner. The roster puts
//! each learner behind its own lock, which serializes the
//! read-modify-write span of `enroll` and `complete_course` per student
//! while operations on different students never contend.

use std::collections::HashMap;
use std::sync::Arc;

use itertools::Itertools;
use parking_lot::Mutex;
use tracing::info;

use crate::error::{Result, TrajectoryError};
use crate::progression::StudentProgression;

/// Owns every registered learner, keyed by student id.
#[derive(Debug, Default)]
pub struct StudentRoster {
    students: HashMap<String, Arc<Mutex<StudentProgression>>>,
}

impl StudentRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly enrolled learner. Ids must be unique; learners
    /// are never removed.
    pub fn register(&mut self, student: StudentProgression) -> Result<()> {
        let id = student.student_id.clone();
        if self.students.contains_key(&id) {
            return Err(TrajectoryError::DuplicateStudent(id));
        }
        info!(student = %id, program = %student.program, "student registered");
        self.students.insert(id, Arc::new(Mutex::new(student)));
        Ok(())
    }

    /// Handle to one learner's state and lock.
    pub fn student(&self, student_id: &str) -> Result<Arc<Mutex<StudentProgression>>> {
        self.students
            .get(student_id)
            .cloned()
            .ok_or_else(|| TrajectoryError::UnknownStudent(student_id.to_string()))
    }

    /// Run one operation against a learner under their lock.
    pub fn with_student<T>(
        &self,
        student_id: &str,
        op: impl FnOnce(&mut StudentProgression) -> Result<T>,
    ) -> Result<T> {
        let handle = self.student(student_id)?;
        let mut student = handle.lock();
        op(&mut student)
    }

    #[must_use]
    pub fn contains(&self, student_id: &str) -> bool {
        self.students.contains_key(student_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// All registered student ids, sorted for stable listings.
    #[must_use]
    pub fn student_ids(&self) -> Vec<String> {
        self.students.keys().cloned().sorted().collect()
    }
}
