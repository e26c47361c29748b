//! Students and their study partners.
//!
//! The [`Roster`] owns every [`Student`]. Partner links are plain
//! [`StudentId`]s resolved through the roster on demand, so two students can
//! point at each other without either owning the other. A link to a removed
//! student simply resolves to `None`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Identifier of a student within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(Uuid);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graded course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub letter: char,
    pub points: f64,
    pub credits: f64,
}

impl Grade {
    pub fn new(letter: char, points: f64, credits: f64) -> Self {
        Self {
            letter,
            points,
            credits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    grades: Vec<Grade>,
    partner: Option<StudentId>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Credit-weighted grade point average, `None` without any credits.
    pub fn gpa(&self) -> Option<f64> {
        let credits: f64 = self.grades.iter().map(|g| g.credits).sum();
        if credits <= 0.0 {
            return None;
        }
        let weighted: f64 = self.grades.iter().map(|g| g.points * g.credits).sum();
        Some(weighted / credits)
    }
}

/// Owning store of students.
#[derive(Debug, Default)]
pub struct Roster {
    students: HashMap<StudentId, Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll a student and return its id.
    pub fn enroll(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> StudentId {
        let id = StudentId(Uuid::new_v4());
        let student = Student {
            first_name: first_name.into(),
            last_name: last_name.into(),
            grades: Vec::new(),
            partner: None,
        };
        debug!("Enrolling {} as {}", student.full_name(), id);
        self.students.insert(id, student);
        id
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Get a student, returning an error if not enrolled.
    pub fn get_required(&self, id: StudentId) -> CoreResult<&Student> {
        self.get(id).ok_or(CoreError::StudentNotFound(id))
    }

    pub fn record_grade(&mut self, id: StudentId, grade: Grade) -> CoreResult<()> {
        let student = self
            .students
            .get_mut(&id)
            .ok_or(CoreError::StudentNotFound(id))?;
        student.grades.push(grade);
        Ok(())
    }

    /// Make two enrolled students each other's partner.
    pub fn pair(&mut self, a: StudentId, b: StudentId) -> CoreResult<()> {
        self.get_required(a)?;
        self.get_required(b)?;

        for (id, partner) in [(a, b), (b, a)] {
            if let Some(student) = self.students.get_mut(&id) {
                student.partner = Some(partner);
            }
        }
        debug!("Paired {} with {}", a, b);
        Ok(())
    }

    /// Resolve a student's partner, `None` if unset or no longer enrolled.
    pub fn partner_of(&self, id: StudentId) -> Option<&Student> {
        let partner = self.students.get(&id)?.partner?;
        self.students.get(&partner)
    }

    /// Drop a student from the roster, returning it.
    pub fn remove(&mut self, id: StudentId) -> Option<Student> {
        let removed = self.students.remove(&id);
        if let Some(student) = &removed {
            debug!("{} is being removed", student.full_name());
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
