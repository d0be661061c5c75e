//! Teacher domain entity

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::student::Student;

/// A teacher, identified by its email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teacher {
    pub fn new(id: i32, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A teacher together with its registered students, in registration order.
#[derive(Debug, Clone)]
pub struct TeacherRoster {
    pub teacher: Teacher,
    pub students: Vec<Student>,
}

impl TeacherRoster {
    pub fn new(teacher: Teacher) -> Self {
        Self {
            teacher,
            students: Vec::new(),
        }
    }

    pub fn student_emails(&self) -> Vec<String> {
        self.students.iter().map(|s| s.email.clone()).collect()
    }
}

/// Emails of the students registered to every roster.
///
/// The result keeps the order of the first roster, filtered by membership
/// in each following one. No rosters yields an empty list.
pub fn common_students(rosters: &[TeacherRoster]) -> Vec<String> {
    let Some((first, rest)) = rosters.split_first() else {
        return Vec::new();
    };

    rest.iter().fold(first.student_emails(), |acc, roster| {
        let members: HashSet<&str> = roster.students.iter().map(|s| s.email.as_str()).collect();
        acc.into_iter()
            .filter(|email| members.contains(email.as_str()))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(teacher: &str, students: &[&str]) -> TeacherRoster {
        let mut r = TeacherRoster::new(Teacher::new(0, teacher));
        r.students = students
            .iter()
            .enumerate()
            .map(|(i, email)| Student::new(i as i32 + 1, *email))
            .collect();
        r
    }

    #[test]
    fn no_rosters_yield_nothing() {
        assert!(common_students(&[]).is_empty());
    }

    #[test]
    fn single_roster_is_returned_whole() {
        let r = roster("ta@mail.com", &["x@mail.com", "y@mail.com"]);
        assert_eq!(common_students(&[r]), vec!["x@mail.com", "y@mail.com"]);
    }

    #[test]
    fn intersection_across_teachers() {
        let a = roster("ta@mail.com", &["a@mail.com", "b@mail.com"]);
        let b = roster("tb@mail.com", &["b@mail.com", "c@mail.com"]);
        assert_eq!(common_students(&[a, b]), vec!["b@mail.com"]);
    }

    #[test]
    fn order_follows_first_roster() {
        let a = roster("ta@mail.com", &["z@mail.com", "m@mail.com", "a@mail.com"]);
        let b = roster("tb@mail.com", &["a@mail.com", "z@mail.com", "m@mail.com"]);
        let c = roster("tc@mail.com", &["m@mail.com", "z@mail.com"]);
        assert_eq!(common_students(&[a, b, c]), vec!["z@mail.com", "m@mail.com"]);
    }

    #[test]
    fn disjoint_rosters_yield_nothing() {
        let a = roster("ta@mail.com", &["a@mail.com"]);
        let b = roster("tb@mail.com", &["b@mail.com"]);
        let empty = roster("tc@mail.com", &[]);
        assert!(common_students(&[a.clone(), b]).is_empty());
        assert!(common_students(&[a, empty]).is_empty());
    }
}
