//! Quote and simulated payment handlers.

use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use samudra_core::{
    payment_acknowledgement, quote_for, Catalog, CoreError, OrderTotals, PaymentMethod,
    PaymentMode, PaymentRequest,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_core_error, map_rejection, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct QuoteRequest {
    pub product_id: String,
    pub size_label: String,
    #[serde(default)]
    pub mode: PaymentMode,
}

#[derive(Debug, Serialize)]
pub(super) struct PaymentReceipt {
    title: String,
    description: String,
    product_id: String,
    product_name: String,
    size_label: String,
    finish: Option<String>,
    method: PaymentMethod,
    totals: OrderTotals,
}

struct PricedOrder {
    product_name: String,
    finish: Option<String>,
    totals: OrderTotals,
}

fn price_order(
    catalog: &Catalog,
    product_id: &str,
    size_label: &str,
    finish: Option<&str>,
    mode: PaymentMode,
) -> Result<PricedOrder, CoreError> {
    let product = catalog
        .find(product_id)
        .ok_or_else(|| CoreError::UnknownProduct(product_id.to_string()))?;
    let totals = quote_for(product, size_label, mode)?;
    let finish = product.select_finish(finish)?.map(ToOwned::to_owned);
    Ok(PricedOrder {
        product_name: product.name.clone(),
        finish,
        totals,
    })
}

/// POST /api/v1/quote
pub(super) async fn quote(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<OrderTotals>>, ApiError> {
    let Json(body) = body.map_err(|e| map_rejection(req_id.0.clone(), &e))?;
    let order = price_order(
        &state.catalog,
        &body.product_id,
        &body.size_label,
        None,
        body.mode,
    )
    .map_err(|e| map_core_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(order.totals, req_id.0)))
}

/// POST /api/v1/payments. Nothing is charged; the configured delay stands in
/// for the payment processor.
pub(super) async fn submit_payment(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PaymentReceipt>>, ApiError> {
    let rid = &req_id.0;
    let Json(body) = body.map_err(|e| map_rejection(rid.clone(), &e))?;

    body.validate()
        .map_err(|e| map_core_error(rid.clone(), &e))?;
    let PricedOrder {
        product_name,
        finish,
        totals,
    } = price_order(
        &state.catalog,
        &body.product_id,
        &body.size_label,
        body.finish.as_deref(),
        body.mode,
    )
    .map_err(|e| map_core_error(rid.clone(), &e))?;

    tokio::time::sleep(state.config.payment_delay()).await;

    tracing::info!(
        request_id = %rid,
        product_id = %body.product_id,
        size = %body.size_label,
        finish = finish.as_deref().unwrap_or("-"),
        mode = %totals.mode,
        amount_due_now = totals.amount_due_now,
        "simulated payment completed"
    );

    let ack = payment_acknowledgement(&totals);
    let data = PaymentReceipt {
        title: ack.title,
        description: ack.description,
        product_id: body.product_id,
        product_name,
        size_label: body.size_label,
        finish,
        method: body.method,
        totals,
    };

    Ok(Json(ApiResponse::new(data, req_id.0)))
}
