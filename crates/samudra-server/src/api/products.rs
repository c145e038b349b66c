use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use samudra_core::{
    filter_products, Category, CategoryCount, CoreError, FilterSelection, Material, Product,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_core_error, map_rejection, ApiError, ApiResponse, AppState};

const FEATURED_LIMIT: usize = 4;
const RELATED_LIMIT: usize = 3;

/// Compact product shape used on listing pages.
#[derive(Debug, Serialize)]
pub(super) struct ProductCard {
    id: String,
    name: String,
    material: Material,
    category: Category,
    min_price: u64,
    max_price: u64,
    delivery_time: String,
    image: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            material: product.material,
            category: product.category,
            min_price: product.min_price().unwrap_or(0),
            max_price: product.max_price().unwrap_or(0),
            delivery_time: product.delivery_time.clone(),
            image: product.primary_image().map(ToOwned::to_owned),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ProductListData {
    products: Vec<ProductCard>,
    shown: usize,
    total: usize,
    filters_active: bool,
    catalog_max_price: u64,
}

#[derive(Debug, Serialize)]
pub(super) struct ProductDetail {
    #[serde(flatten)]
    product: Product,
    min_price: u64,
    max_price: u64,
    related: Vec<ProductCard>,
}

#[derive(Debug, Serialize)]
pub(super) struct FiltersData {
    materials: Vec<Material>,
    categories: Vec<CategoryCount>,
    max_price: u64,
}

/// `material` and `category` accept comma-separated values.
#[derive(Debug, Deserialize)]
pub(super) struct ProductQuery {
    pub material: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<ProductListData>>, ApiError> {
    let Query(query) = query.map_err(|e| map_rejection(req_id.0.clone(), &e))?;
    let catalog_max = state.catalog.max_price();

    let materials: Vec<&str> = query.material.as_deref().into_iter().collect();
    let categories: Vec<&str> = query.category.as_deref().into_iter().collect();
    let selection = FilterSelection::from_query(
        &materials,
        &categories,
        query.min_price,
        query.max_price,
        catalog_max,
    )
    .map_err(|e| map_core_error(req_id.0.clone(), &e))?;

    let matched = filter_products(state.catalog.products(), &selection);
    tracing::debug!(
        request_id = %req_id.0,
        matched = matched.len(),
        "filtered catalog"
    );

    let data = ProductListData {
        shown: matched.len(),
        total: state.catalog.products().len(),
        filters_active: selection.is_active(catalog_max),
        catalog_max_price: catalog_max,
        products: matched.into_iter().map(ProductCard::from).collect(),
    };

    Ok(Json(ApiResponse::new(data, req_id.0)))
}

pub(super) async fn featured_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<ProductCard>>> {
    let data = state
        .catalog
        .featured(FEATURED_LIMIT)
        .into_iter()
        .map(ProductCard::from)
        .collect();

    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductDetail>>, ApiError> {
    let Some(product) = state.catalog.find(&id) else {
        return Err(map_core_error(req_id.0, &CoreError::UnknownProduct(id)));
    };

    let related = state
        .catalog
        .related(product, RELATED_LIMIT)
        .into_iter()
        .map(ProductCard::from)
        .collect();

    let data = ProductDetail {
        min_price: product.min_price().unwrap_or(0),
        max_price: product.max_price().unwrap_or(0),
        product: product.clone(),
        related,
    };

    Ok(Json(ApiResponse::new(data, req_id.0)))
}

pub(super) async fn list_filters(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<FiltersData>> {
    let data = FiltersData {
        materials: Material::ALL.to_vec(),
        categories: state.catalog.category_counts(),
        max_price: state.catalog.max_price(),
    };

    Json(ApiResponse::new(data, req_id.0))
}
