//! Teacher business service — application-layer orchestration
//!
//! All roster business logic lives here: registration, common students,
//! suspension and notification recipients. HTTP handlers are thin wrappers
//! that validate input and delegate to this service.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    common_students, extract_mentions, merge_recipients, DomainResult, Registration,
    RepositoryProvider, Student, Teacher, TeacherRoster,
};

/// Acknowledgement returned by a successful registration.
pub const REGISTER_SUCCESS: &str = "Register Successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAck {
    pub message: String,
}

/// Stateless service over the repositories; everything it knows lives in
/// storage.
pub struct TeacherBusinessService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TeacherBusinessService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Listings ────────────────────────────────────────────────

    pub async fn get_all_students(&self) -> DomainResult<Vec<Student>> {
        self.repos.students().find_all().await
    }

    pub async fn get_all_teachers(&self) -> DomainResult<Vec<Teacher>> {
        self.repos.teachers().find_all().await
    }

    pub async fn get_all_registrations(&self) -> DomainResult<Vec<Registration>> {
        self.repos.registrations().find_all().await
    }

    // ── Registration ────────────────────────────────────────────

    /// Register `student_emails` to the teacher, creating any of them that
    /// do not exist yet. Pairs that are already registered are left alone.
    pub async fn register_students(
        &self,
        teacher_email: &str,
        student_emails: &[String],
    ) -> DomainResult<RegisterAck> {
        let outcome = self
            .repos
            .registrations()
            .register(teacher_email, student_emails)
            .await?;

        info!(
            teacher = %outcome.teacher.email,
            created = outcome.created,
            existing = outcome.existing,
            "Students registered"
        );
        metrics::counter!("roster_registrations_total").increment(outcome.created as u64);

        Ok(RegisterAck {
            message: REGISTER_SUCCESS.to_string(),
        })
    }

    // ── Common students ─────────────────────────────────────────

    /// Students registered to every known teacher in `teacher_emails`.
    ///
    /// Unknown teachers are ignored. Rosters are intersected in input order,
    /// so the result follows the first known teacher's registration order.
    pub async fn get_common_students(&self, teacher_emails: &[String]) -> DomainResult<Vec<String>> {
        let mut rosters = self.repos.teachers().find_with_students(teacher_emails).await?;

        let mut seen = HashSet::new();
        let ordered: Vec<TeacherRoster> = teacher_emails
            .iter()
            .filter(|email| seen.insert(email.as_str()))
            .filter_map(|email| {
                let pos = rosters.iter().position(|r| &r.teacher.email == email)?;
                Some(rosters.swap_remove(pos))
            })
            .collect();

        debug!(
            requested = teacher_emails.len(),
            found = ordered.len(),
            "Computing common students"
        );
        Ok(common_students(&ordered))
    }

    // ── Suspension ──────────────────────────────────────────────

    pub async fn find_student(&self, email: &str) -> DomainResult<Option<Student>> {
        self.repos.students().find_by_email(email).await
    }

    /// Suspend a student the caller has already looked up.
    ///
    /// Existence is the caller's concern; this only flips the flag and
    /// persists it.
    pub async fn suspend_student(&self, student: &mut Student) -> DomainResult<bool> {
        student.suspend();
        self.repos.students().save(student).await?;

        info!(student = %student.email, "Student suspended");
        metrics::counter!("roster_suspensions_total").increment(1);
        Ok(true)
    }

    // ── Notifications ───────────────────────────────────────────

    /// Students who receive `notification` from `teacher_email`.
    ///
    /// Union of the teacher's unsuspended students and every unsuspended
    /// student `@mentioned` in the text, without duplicates. Unknown teachers
    /// and unknown or suspended mentions contribute nobody.
    pub async fn get_notification_recipients(
        &self,
        teacher_email: &str,
        notification: &str,
    ) -> DomainResult<Vec<String>> {
        let registered = self
            .repos
            .teachers()
            .find_with_unsuspended_students(teacher_email)
            .await?
            .map(|roster| roster.student_emails())
            .unwrap_or_default();

        let mentions = extract_mentions(notification);
        let mentioned = if mentions.is_empty() {
            Vec::new()
        } else {
            self.repos
                .students()
                .find_unsuspended_by_emails(&mentions)
                .await?
                .into_iter()
                .map(|s| s.email)
                .collect()
        };

        let recipients = merge_recipients([registered, mentioned]);
        debug!(
            teacher = %teacher_email,
            mentions = mentions.len(),
            recipients = recipients.len(),
            "Resolved notification recipients"
        );
        metrics::counter!("roster_notification_recipients_total").increment(recipients.len() as u64);
        Ok(recipients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    async fn service() -> TeacherBusinessService {
        let repos = Arc::new(SeaOrmRepositoryProvider::new(test_database().await));
        TeacherBusinessService::new(repos)
    }

    fn emails(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    async fn suspend(svc: &TeacherBusinessService, email: &str) {
        let mut s = svc.find_student(email).await.unwrap().unwrap();
        assert!(svc.suspend_student(&mut s).await.unwrap());
    }

    #[tokio::test]
    async fn register_creates_students_and_links() {
        let svc = service().await;

        let ack = svc
            .register_students("t@x.com", &emails(&["s1@x.com", "s2@x.com"]))
            .await
            .unwrap();

        assert_eq!(ack.message, REGISTER_SUCCESS);
        assert_eq!(svc.get_all_students().await.unwrap().len(), 2);
        assert_eq!(svc.get_all_registrations().await.unwrap().len(), 2);
        assert_eq!(
            svc.get_common_students(&emails(&["t@x.com"])).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn register_with_no_students_creates_only_the_teacher() {
        let svc = service().await;

        svc.register_students("t@x.com", &[]).await.unwrap();

        let teachers = svc.get_all_teachers().await.unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].email, "t@x.com");
        assert!(svc.get_all_registrations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn listings_report_suspension() {
        let svc = service().await;
        svc.register_students("t@x.com", &emails(&["a@mail.com", "b@mail.com"]))
            .await
            .unwrap();
        suspend(&svc, "b@mail.com").await;

        let students = svc.get_all_students().await.unwrap();
        let flags: Vec<(String, bool)> = students.into_iter().map(|s| (s.email, s.suspended)).collect();
        assert_eq!(
            flags,
            vec![("a@mail.com".to_string(), false), ("b@mail.com".to_string(), true)]
        );
    }

    #[tokio::test]
    async fn common_students_of_two_teachers() {
        let svc = service().await;
        svc.register_students("ta@x.com", &emails(&["common@x.com", "only-a@x.com"]))
            .await
            .unwrap();
        svc.register_students("tb@x.com", &emails(&["only-b@x.com", "common@x.com"]))
            .await
            .unwrap();

        let common = svc
            .get_common_students(&emails(&["ta@x.com", "tb@x.com"]))
            .await
            .unwrap();
        assert_eq!(common, vec!["common@x.com"]);
    }

    #[tokio::test]
    async fn common_students_follow_first_requested_teacher() {
        let svc = service().await;
        svc.register_students("ta@x.com", &emails(&["a@x.com", "b@x.com"]))
            .await
            .unwrap();
        svc.register_students("tb@x.com", &emails(&["b@x.com", "a@x.com"]))
            .await
            .unwrap();

        let ab = svc
            .get_common_students(&emails(&["ta@x.com", "tb@x.com"]))
            .await
            .unwrap();
        let ba = svc
            .get_common_students(&emails(&["tb@x.com", "ta@x.com"]))
            .await
            .unwrap();
        assert_eq!(ab, vec!["a@x.com", "b@x.com"]);
        assert_eq!(ba, vec!["b@x.com", "a@x.com"]);
    }

    #[tokio::test]
    async fn common_students_with_unknown_teachers() {
        let svc = service().await;
        svc.register_students("ta@x.com", &emails(&["x@x.com"]))
            .await
            .unwrap();

        assert!(svc.get_common_students(&[]).await.unwrap().is_empty());
        assert!(svc
            .get_common_students(&emails(&["ghost@x.com", "phantom@x.com"]))
            .await
            .unwrap()
            .is_empty());
        // Unknown teachers are skipped rather than emptying the intersection.
        assert_eq!(
            svc.get_common_students(&emails(&["ta@x.com", "ghost@x.com"]))
                .await
                .unwrap(),
            vec!["x@x.com"]
        );
    }

    #[tokio::test]
    async fn suspending_twice_keeps_student_suspended() {
        let svc = service().await;
        svc.register_students("t@x.com", &emails(&["s@x.com"]))
            .await
            .unwrap();

        suspend(&svc, "s@x.com").await;
        suspend(&svc, "s@x.com").await;

        assert!(svc.find_student("s@x.com").await.unwrap().unwrap().suspended);
    }

    #[tokio::test]
    async fn recipients_are_registered_students_without_mentions() {
        let svc = service().await;
        svc.register_students("t@mail.com", &emails(&["r1@mail.com", "r2@mail.com"]))
            .await
            .unwrap();

        let recipients = svc
            .get_notification_recipients("t@mail.com", "Hello students")
            .await
            .unwrap();
        assert_eq!(sorted(recipients), emails(&["r1@mail.com", "r2@mail.com"]));
    }

    #[tokio::test]
    async fn recipients_of_unknown_teacher_are_the_mentions() {
        let svc = service().await;
        svc.register_students("other@mail.com", &emails(&["m1@mail.com", "m2@mail.com"]))
            .await
            .unwrap();

        let recipients = svc
            .get_notification_recipients("missing@mail.com", "Hi @m1@mail.com and @m2@mail.com")
            .await
            .unwrap();
        assert_eq!(sorted(recipients), emails(&["m1@mail.com", "m2@mail.com"]));
    }

    #[tokio::test]
    async fn recipients_union_without_duplicates() {
        let svc = service().await;
        svc.register_students("t@mail.com", &emails(&["r1@mail.com", "m1@mail.com"]))
            .await
            .unwrap();
        svc.register_students("other@mail.com", &emails(&["m2@mail.com"]))
            .await
            .unwrap();

        let recipients = svc
            .get_notification_recipients("t@mail.com", "Notice to @m1@mail.com and @m2@mail.com")
            .await
            .unwrap();
        assert_eq!(
            sorted(recipients),
            emails(&["m1@mail.com", "m2@mail.com", "r1@mail.com"])
        );
    }

    #[tokio::test]
    async fn suspended_students_never_receive_notifications() {
        let svc = service().await;
        svc.register_students("t@mail.com", &emails(&["r1@mail.com", "r2@mail.com"]))
            .await
            .unwrap();
        svc.register_students("other@mail.com", &emails(&["active@mail.com", "suspended@mail.com"]))
            .await
            .unwrap();
        suspend(&svc, "r2@mail.com").await;
        suspend(&svc, "suspended@mail.com").await;

        let recipients = svc
            .get_notification_recipients(
                "t@mail.com",
                "Hello @suspended@mail.com and @active@mail.com and @r2@mail.com",
            )
            .await
            .unwrap();
        assert_eq!(sorted(recipients), emails(&["active@mail.com", "r1@mail.com"]));
    }

    #[tokio::test]
    async fn mentions_of_unknown_students_are_ignored() {
        let svc = service().await;

        let recipients = svc
            .get_notification_recipients("t@mail.com", "Hey @nobody@mail.com")
            .await
            .unwrap();
        assert!(recipients.is_empty());
    }
}
