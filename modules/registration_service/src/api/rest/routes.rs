//! Route registration and OpenAPI document

use super::{
    auth::{require_login, JwtAuth},
    dto::*,
    error::Problem,
    handlers,
};
use crate::contract::LoginIdentity;
use crate::domain::Service;
use axum::{
    body::Bytes,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

/// OpenAPI description of the registration endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register_mentor_handler, register_student_handler),
    components(schemas(RegisterMentorRequest, RegisterStudentRequest, Problem)),
    modifiers(&SecurityAddon),
    tags((name = "registration", description = "Mentor and student registration"))
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Register all REST routes
///
/// Registration routes sit behind the login middleware; the OpenAPI document
/// is public.
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    auth: Arc<JwtAuth>,
) -> anyhow::Result<Router> {
    let protected = Router::new()
        .route("/mentor/form", post(register_mentor_handler))
        .route("/student/form", post(register_student_handler))
        .route_layer(middleware::from_fn_with_state(auth, require_login))
        .layer(Extension(service));

    Ok(router
        .merge(protected)
        .route("/openapi.json", get(openapi_handler)))
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// ===== Handler wrappers that extract service from Extension =====

#[utoipa::path(
    post,
    path = "/mentor/form",
    tag = "registration",
    request_body = RegisterMentorRequest,
    responses(
        (status = 200, description = "Mentor registration successful.", body = String),
        (status = 400, description = "Malformed body or mentor already registered", body = Problem),
        (status = 401, description = "Missing login or username mismatch", body = Problem),
        (status = 500, description = "Database error", body = Problem)
    ),
    security(("bearer" = []))
)]
async fn register_mentor_handler(
    Extension(service): Extension<Arc<Service>>,
    login: LoginIdentity,
    body: Bytes,
) -> Result<(StatusCode, String), Problem> {
    handlers::register_mentor(service, login, body).await
}

#[utoipa::path(
    post,
    path = "/student/form",
    tag = "registration",
    request_body = RegisterStudentRequest,
    responses(
        (status = 200, description = "Student registration successful.", body = String),
        (status = 400, description = "Malformed body or student already registered", body = Problem),
        (status = 401, description = "Missing login or username mismatch", body = Problem),
        (status = 500, description = "Database error", body = Problem)
    ),
    security(("bearer" = []))
)]
async fn register_student_handler(
    Extension(service): Extension<Arc<Service>>,
    login: LoginIdentity,
    body: Bytes,
) -> Result<(StatusCode, String), Problem> {
    handlers::register_student(service, login, body).await
}
