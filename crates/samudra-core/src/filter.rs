//! Shop-page filtering by material, category and price range.
//!
//! An empty material or category set means "no restriction", not "match
//! nothing". Price filtering is interval overlap: a product is kept when any
//! of its size tiers could fall within the selected range.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::products::{Category, Material, Product};
use crate::CoreError;

/// Inclusive `[min, max]` price bounds, with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl PriceRange {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPriceRange` when `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, CoreError> {
        if min > max {
            return Err(CoreError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// `[0, max]`, the full slider span.
    #[must_use]
    pub fn up_to(max: u64) -> Self {
        Self { min: 0, max }
    }

    #[must_use]
    pub fn min(&self) -> u64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// `true` when `[lo, hi]` shares at least one value with this range.
    #[must_use]
    pub fn overlaps(&self, lo: u64, hi: u64) -> bool {
        !(hi < self.min || lo > self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub materials: BTreeSet<Material>,
    pub categories: BTreeSet<Category>,
    pub price_range: PriceRange,
}

impl FilterSelection {
    /// No material or category restriction, price range `[0, catalog_max]`.
    #[must_use]
    pub fn unrestricted(catalog_max: u64) -> Self {
        Self {
            materials: BTreeSet::new(),
            categories: BTreeSet::new(),
            price_range: PriceRange::up_to(catalog_max),
        }
    }

    /// Builds a selection from raw query values.
    ///
    /// Materials and categories may be comma-separated; blank entries are
    /// ignored. Missing price bounds default to `0` and `catalog_max`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` for an unknown material or category, or when the
    /// resulting minimum exceeds the maximum.
    pub fn from_query(
        materials: &[&str],
        categories: &[&str],
        min_price: Option<u64>,
        max_price: Option<u64>,
        catalog_max: u64,
    ) -> Result<Self, CoreError> {
        let materials = split_values(materials)
            .map(str::parse::<Material>)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let categories = split_values(categories)
            .map(str::parse::<Category>)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let price_range = PriceRange::new(
            min_price.unwrap_or(0),
            max_price.unwrap_or(catalog_max),
        )?;

        Ok(Self {
            materials,
            categories,
            price_range,
        })
    }

    /// Add the material if absent, remove it if present.
    pub fn toggle_material(&mut self, material: Material) {
        if !self.materials.remove(&material) {
            self.materials.insert(material);
        }
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn clear(&mut self, catalog_max: u64) {
        *self = Self::unrestricted(catalog_max);
    }

    /// Whether this selection narrows the catalog relative to [`Self::unrestricted`].
    #[must_use]
    pub fn is_active(&self, catalog_max: u64) -> bool {
        !self.materials.is_empty()
            || !self.categories.is_empty()
            || self.price_range.min() > 0
            || self.price_range.max() < catalog_max
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.materials.is_empty() && !self.materials.contains(&product.material) {
            return false;
        }

        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }

        match (product.min_price(), product.max_price()) {
            (Some(lo), Some(hi)) => self.price_range.overlaps(lo, hi),
            _ => false,
        }
    }
}

/// Stable filter over the catalog; the result keeps catalog order.
#[must_use]
pub fn filter_products<'a>(
    catalog: &'a [Product],
    selection: &FilterSelection,
) -> Vec<&'a Product> {
    catalog.iter().filter(|p| selection.matches(p)).collect()
}

fn split_values<'a>(values: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
