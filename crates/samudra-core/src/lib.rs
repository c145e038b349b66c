pub mod app_config;
pub mod catalog;
pub mod config;
pub mod content;
pub mod filter;
pub mod forms;
pub mod pagination;
pub mod payment;
pub mod pricing;
pub mod products;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, Catalog, CatalogFile, CategoryCount};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{GalleryItem, Testimonial};
pub use filter::{filter_products, FilterSelection, PriceRange};
pub use forms::{
    Acknowledgement, ContactMessage, CustomMaterial, CustomOrderRequest, ReferenceImage,
    StatueType, MAX_REFERENCE_IMAGE_BYTES,
};
pub use pagination::{paginate, total_pages, Page};
pub use payment::{
    format_card_number, format_expiry_date, format_rupees, payment_acknowledgement, PaymentMethod,
    PaymentRequest,
};
pub use pricing::{compute_order_totals, quote_for, OrderTotals, PaymentMode, DELIVERY_FEE};
pub use products::{Category, Material, Product, Size};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}

/// Errors raised by the pure catalog, pricing, and form operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unknown product: {0}")]
    UnknownProduct(String),

    #[error("product '{product_id}' has no size '{label}'")]
    UnknownSize { product_id: String, label: String },

    #[error("product '{product_id}' is not offered in finish '{finish}'")]
    UnknownFinish { product_id: String, finish: String },

    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: u64, max: u64 },
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
