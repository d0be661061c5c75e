//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::TeacherBusinessService;
use crate::domain::RepositoryProvider;

use super::common::ErrorBody;
use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::roster::{self, roster_routes};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Roster
        roster::list_students,
        roster::list_teachers,
        roster::list_registrations,
        roster::register_students,
        roster::common_students,
        roster::suspend_student,
        roster::retrieve_for_notifications,
    ),
    components(
        schemas(
            ErrorBody,
            health::HealthResponse,
            health::ComponentHealth,
            roster::StudentDto,
            roster::TeacherDto,
            roster::RegistrationDto,
            roster::StudentListResponse,
            roster::TeacherListResponse,
            roster::RegistrationListResponse,
            roster::RegisterRequest,
            roster::MessageResponse,
            roster::CommonStudentsResponse,
            roster::SuspendRequest,
            roster::NotificationRequest,
            roster::RecipientsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Roster", description = "Teacher/student registration, suspension and notifications"),
    ),
    info(
        title = "Roster Service API",
        version = "1.0.0",
        description = "REST API for teachers to manage their students",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is only mounted when a Prometheus handle is supplied.
pub fn create_api_router(
    service: Arc<TeacherBusinessService>,
    repos: Arc<dyn RepositoryProvider>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Router {
    let health_state = HealthState {
        repos,
        started_at: Arc::new(Instant::now()),
    };
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .nest("/api", roster_routes(service));

    if let Some(handle) = prometheus_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::SeaOrmRepositoryProvider;
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;

    async fn app() -> Router {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(test_database().await));
        let service = Arc::new(TeacherBusinessService::new(repos.clone()));
        create_api_router(service, repos, None)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok_with_reachable_database() {
        let response = app()
            .await
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn roster_routes_live_under_api_prefix() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "teacher": "t@x.com", "students": ["s@x.com"] }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(Request::get("/api/teachers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            json_body(response).await,
            json!({ "teachers": [{ "email": "t@x.com" }] })
        );
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let response = app()
            .await
            .oneshot(
                Request::get("/api/students")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn openapi_document_lists_roster_paths() {
        let response = app()
            .await
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = json_body(response).await;
        for path in [
            "/api/register",
            "/api/commonstudents",
            "/api/suspend",
            "/api/retrievefornotifications",
        ] {
            assert!(doc["paths"].get(path).is_some(), "missing {path}");
        }
    }

    #[tokio::test]
    async fn metrics_route_is_absent_without_handle() {
        let response = app()
            .await
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
