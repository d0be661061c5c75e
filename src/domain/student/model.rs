//! Student domain entity

use chrono::{DateTime, Utc};

/// A student, identified by its email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Surrogate key assigned by storage
    pub id: i32,
    /// Natural key, unique across students
    pub email: String,
    /// Suspended students never receive notifications
    pub suspended: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    pub fn new(id: i32, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            suspended: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the student as suspended.
    ///
    /// One-way: nothing in the service clears the flag again.
    pub fn suspend(&mut self) {
        if !self.suspended {
            self.suspended = true;
            self.updated_at = Utc::now();
        }
    }
}
