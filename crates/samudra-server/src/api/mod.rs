mod content;
mod orders;
mod products;
mod submissions;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use samudra_core::{AppConfig, Catalog, CoreError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<AppConfig>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    products: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(data: T, request_id: String) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_core_error(request_id: String, error: &CoreError) -> ApiError {
    let code = match error {
        CoreError::UnknownProduct(_) => "not_found",
        CoreError::Validation(_) => "validation_error",
        CoreError::InvalidInput(_)
        | CoreError::UnknownSize { .. }
        | CoreError::UnknownFinish { .. }
        | CoreError::UnknownMaterial(_)
        | CoreError::UnknownCategory(_)
        | CoreError::InvalidPriceRange { .. } => "bad_request",
    };
    tracing::debug!(request_id = %request_id, error = %error, code, "request rejected");
    ApiError::new(request_id, code, error.to_string())
}

/// Query strings and JSON bodies that fail to deserialize still get the
/// error envelope instead of axum's plain-text rejection.
pub(super) fn map_rejection(request_id: String, rejection: &impl std::fmt::Display) -> ApiError {
    ApiError::new(request_id, "bad_request", rejection.to_string())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn submission_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/payments", post(orders::submit_payment))
        .route("/api/v1/custom-orders", post(submissions::submit_custom_order))
        .route("/api/v1/contact", post(submissions::submit_contact))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let catalog_routes = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/products", get(products::list_products))
        .route("/api/v1/products/featured", get(products::featured_products))
        .route("/api/v1/products/{id}", get(products::get_product))
        .route("/api/v1/filters", get(products::list_filters))
        .route("/api/v1/quote", post(orders::quote))
        .route("/api/v1/gallery", get(content::list_gallery))
        .route("/api/v1/testimonials", get(content::list_testimonials));

    Router::new()
        .merge(catalog_routes)
        .merge(submission_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::new(
        HealthData {
            status: "ok",
            products: state.catalog.products().len(),
        },
        req_id.0,
    ))
}
