//! Contact and custom-order forms. Nothing is stored or forwarded.

use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use samudra_core::{Acknowledgement, ContactMessage, CustomOrderRequest};

use crate::middleware::RequestId;

use super::{map_core_error, map_rejection, ApiError, ApiResponse, AppState};

pub(super) async fn submit_contact(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<ApiResponse<Acknowledgement>>, ApiError> {
    let Json(body) = body.map_err(|e| map_rejection(req_id.0.clone(), &e))?;
    body.validate()
        .map_err(|e| map_core_error(req_id.0.clone(), &e))?;

    tokio::time::sleep(state.config.contact_delay()).await;
    tracing::info!(request_id = %req_id.0, subject = %body.subject, "contact message accepted");

    Ok(Json(ApiResponse::new(
        ContactMessage::acknowledgement(),
        req_id.0,
    )))
}

pub(super) async fn submit_custom_order(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<CustomOrderRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Acknowledgement>>, ApiError> {
    let Json(body) = body.map_err(|e| map_rejection(req_id.0.clone(), &e))?;
    body.validate()
        .map_err(|e| map_core_error(req_id.0.clone(), &e))?;

    tokio::time::sleep(state.config.custom_order_delay()).await;
    tracing::info!(
        request_id = %req_id.0,
        statue_type = ?body.statue_type,
        material = ?body.material,
        references = body.reference_images.len(),
        "custom order request accepted"
    );

    Ok(Json(ApiResponse::new(
        CustomOrderRequest::acknowledgement(),
        req_id.0,
    )))
}
