//! Roster handlers
//!
//! Thin wrappers: validate the request shape, delegate to
//! `TeacherBusinessService`, translate the result into a response.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    teacher_emails_from_query, CommonStudentsResponse, MessageResponse, NotificationRequest,
    RecipientsResponse, RegisterRequest, RegistrationDto, RegistrationListResponse,
    StudentDto, StudentListResponse, SuspendRequest, TeacherDto, TeacherListResponse,
};
use crate::application::TeacherBusinessService;
use crate::domain::DomainError;
use crate::interfaces::http::common::messages::{MISSING_TEACHER_EMAILS, SOME_ERROR_OCCURRED};
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson};

/// Roster handler state
#[derive(Clone)]
pub struct RosterState {
    pub service: Arc<TeacherBusinessService>,
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "Roster",
    responses(
        (status = 200, description = "All students", body = StudentListResponse),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
pub async fn list_students(
    State(state): State<RosterState>,
) -> Result<Json<StudentListResponse>, ApiError> {
    let students = state.service.get_all_students().await?;
    Ok(Json(StudentListResponse {
        students: students.into_iter().map(StudentDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = "Roster",
    responses(
        (status = 200, description = "All teachers", body = TeacherListResponse),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
pub async fn list_teachers(
    State(state): State<RosterState>,
) -> Result<Json<TeacherListResponse>, ApiError> {
    let teachers = state.service.get_all_teachers().await?;
    Ok(Json(TeacherListResponse {
        teachers: teachers.into_iter().map(TeacherDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/registrations",
    tag = "Roster",
    responses(
        (status = 200, description = "All registrations", body = RegistrationListResponse),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
pub async fn list_registrations(
    State(state): State<RosterState>,
) -> Result<Json<RegistrationListResponse>, ApiError> {
    let registrations = state.service.get_all_registrations().await?;
    Ok(Json(RegistrationListResponse {
        registrations: registrations.into_iter().map(RegistrationDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Roster",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Students registered", body = MessageResponse),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
pub async fn register_students(
    State(state): State<RosterState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let ack = state
        .service
        .register_students(&request.teacher, &request.students)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: ack.message,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/commonstudents",
    tag = "Roster",
    params(
        ("teacher" = String, Query, description = "Teacher email(s), comma-separated or repeated")
    ),
    responses(
        (status = 200, description = "Students registered to every teacher", body = CommonStudentsResponse),
        (status = 400, description = "Missing teacher emails", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
pub async fn common_students(
    State(state): State<RosterState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<CommonStudentsResponse>, ApiError> {
    let emails = teacher_emails_from_query(&params);
    if emails.is_empty() {
        return Err(ApiError::bad_request(MISSING_TEACHER_EMAILS));
    }

    let students = state.service.get_common_students(&emails).await?;
    Ok(Json(CommonStudentsResponse { students }))
}

#[utoipa::path(
    post,
    path = "/api/suspend",
    tag = "Roster",
    request_body = SuspendRequest,
    responses(
        (status = 204, description = "Student suspended"),
        (status = 400, description = "No student email provided", body = ErrorBody),
        (status = 404, description = "Student not found", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
pub async fn suspend_student(
    State(state): State<RosterState>,
    ValidatedJson(request): ValidatedJson<SuspendRequest>,
) -> Result<StatusCode, ApiError> {
    let mut student = state
        .service
        .find_student(&request.student)
        .await?
        .ok_or_else(|| DomainError::student_not_found(&request.student))?;

    if !state.service.suspend_student(&mut student).await? {
        return Err(ApiError::not_found(SOME_ERROR_OCCURRED));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/retrievefornotifications",
    tag = "Roster",
    request_body = NotificationRequest,
    responses(
        (status = 200, description = "Notification recipients", body = RecipientsResponse),
        (status = 400, description = "Missing teacher or notification", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
pub async fn retrieve_for_notifications(
    State(state): State<RosterState>,
    ValidatedJson(request): ValidatedJson<NotificationRequest>,
) -> Result<Json<RecipientsResponse>, ApiError> {
    let recipients = state
        .service
        .get_notification_recipients(&request.teacher, &request.notification)
        .await?;
    Ok(Json(RecipientsResponse { recipients }))
}
