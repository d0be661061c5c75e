//! Roster module — teachers, students, registrations and notifications

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::TeacherBusinessService;

/// Routes mounted under `/api`.
pub fn roster_routes(service: Arc<TeacherBusinessService>) -> Router {
    Router::new()
        .route("/students", get(handlers::list_students))
        .route("/teachers", get(handlers::list_teachers))
        .route("/registrations", get(handlers::list_registrations))
        .route("/register", post(handlers::register_students))
        .route("/commonstudents", get(handlers::common_students))
        .route("/suspend", post(handlers::suspend_student))
        .route(
            "/retrievefornotifications",
            post(handlers::retrieve_for_notifications),
        )
        .with_state(RosterState { service })
}
