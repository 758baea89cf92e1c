//! HTTP surface: every API route under `/api`, plus the OpenAPI document.

use axum::{
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{docs::ApiDoc, error::AppError, handlers, middleware, state::AppState};

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .route(
            "/todos",
            get(handlers::todos::list_todos).post(handlers::todos::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::todos::get_todo)
                .put(handlers::todos::update_todo)
                .delete(handlers::todos::delete_todo),
        )
        .route("/audit-logs", get(handlers::audit_logs::list_audit_logs))
        .route(
            "/audit-logs/{id}",
            get(handlers::audit_logs::get_audit_log_detail),
        )
        .route("/stats", get(handlers::stats::get_stats))
        .route("/health", get(handlers::health::health))
}

fn cors_layer(allow_origin: &str) -> CorsLayer {
    let origin = match allow_origin {
        "*" => AllowOrigin::any(),
        value => match HeaderValue::from_str(value) {
            Ok(header) => AllowOrigin::exact(header),
            Err(_) => {
                tracing::warn!(origin = value, "Invalid CORS_ALLOW_ORIGIN, allowing any origin");
                AllowOrigin::any()
            }
        },
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(24 * 60 * 60))
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Builds the complete application with shared layers and state.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allow_origin);

    Router::new()
        .nest("/api", api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(axum_middleware::from_fn(middleware::log_error_responses)),
        )
        .with_state(state)
}
