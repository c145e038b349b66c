use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use samudra_core::{paginate, Testimonial};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_core_error, map_rejection, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct GalleryQuery {
    pub page: Option<usize>,
}

/// Serialized in place: the page borrows from the shared catalog.
pub(super) async fn list_gallery(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<GalleryQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| map_rejection(req_id.0.clone(), &e))?;
    let page = paginate(
        state.catalog.gallery(),
        query.page.unwrap_or(1),
        state.config.gallery_page_size,
    )
    .map_err(|e| map_core_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(page, req_id.0)).into_response())
}

pub(super) async fn list_testimonials(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Testimonial>>> {
    Json(ApiResponse::new(
        state.catalog.testimonials().to_vec(),
        req_id.0,
    ))
}
