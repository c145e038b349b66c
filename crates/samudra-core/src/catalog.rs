//! The read-only product catalog.
//!
//! Products, gallery items and testimonials are loaded once from
//! `config/catalog.yaml`, validated, and never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::{GalleryItem, Testimonial};
use crate::products::{Category, Product};
use crate::ConfigError;

/// On-disk shape of the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub products: Vec<Product>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

/// A validated catalog. Construct through [`load_catalog`] or [`Catalog::from_file`].
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    gallery: Vec<GalleryItem>,
    testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub name: &'static str,
    pub product_count: usize,
}

/// Load and validate the catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    Catalog::from_yaml_str(&content)
}

impl Catalog {
    /// Parse and validate catalog YAML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the YAML is malformed or fails validation.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::from_file(file)
    }

    /// Validate an already-deserialized catalog file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first problem found.
    pub fn from_file(file: CatalogFile) -> Result<Self, ConfigError> {
        validate_catalog(&file)?;
        Ok(Self {
            products: file.products,
            gallery: file.gallery,
            testimonials: file.testimonials,
        })
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn gallery(&self) -> &[GalleryItem] {
        &self.gallery
    }

    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Highest size price across the whole catalog; the price slider's upper bound.
    #[must_use]
    pub fn max_price(&self) -> u64 {
        self.products
            .iter()
            .filter_map(Product::max_price)
            .max()
            .unwrap_or(0)
    }

    /// Featured products in catalog order, at most `limit`.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.featured)
            .take(limit)
            .collect()
    }

    /// Products to suggest alongside `product` on its detail page.
    ///
    /// Same-category products come first; if there are fewer than `limit`,
    /// the remainder is filled from the rest of the catalog in order. The
    /// product itself is never included.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        let mut related: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect();

        if related.len() < limit {
            let missing = limit - related.len();
            let others: Vec<&Product> = self
                .products
                .iter()
                .filter(|p| p.id != product.id && !related.iter().any(|r| r.id == p.id))
                .take(missing)
                .collect();
            related.extend(others);
        }

        related
    }

    /// Product count per category, in [`Category::ALL`] order, including empty ones.
    #[must_use]
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                name: category.display_name(),
                product_count: self
                    .products
                    .iter()
                    .filter(|p| p.category == category)
                    .count(),
            })
            .collect()
    }
}

fn validate_catalog(file: &CatalogFile) -> Result<(), ConfigError> {
    if file.products.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must contain at least one product".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();

    for product in &file.products {
        if product.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "product id must be non-empty".to_string(),
            ));
        }

        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' must have a non-empty name",
                product.id
            )));
        }

        if product.sizes.is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' must have at least one size",
                product.id
            )));
        }

        if !seen_ids.insert(product.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: '{}'",
                product.id
            )));
        }
    }

    let mut seen_gallery_ids = HashSet::new();
    for item in &file.gallery {
        if !seen_gallery_ids.insert(item.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate gallery id: {}",
                item.id
            )));
        }
    }

    for testimonial in &file.testimonials {
        if !(1..=5).contains(&testimonial.rating) {
            return Err(ConfigError::Validation(format!(
                "testimonial from '{}' has invalid rating {}; must be 1 to 5",
                testimonial.name, testimonial.rating
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
