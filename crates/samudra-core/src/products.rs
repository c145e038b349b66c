use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Physical composition of a sculpture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Material {
    Dolomite,
    Fiber,
    Concrete,
    Cloth,
}

impl Material {
    pub const ALL: [Material; 4] = [
        Material::Dolomite,
        Material::Fiber,
        Material::Concrete,
        Material::Cloth,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Material::Dolomite => "Dolomite",
            Material::Fiber => "Fiber",
            Material::Concrete => "Concrete",
            Material::Cloth => "Cloth",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = CoreError;

    /// Case-insensitive; `"dolomite"` and `"Dolomite"` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Material::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownMaterial(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BuddhaStatues,
    CustomSculptures,
    Decorative,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::BuddhaStatues,
        Category::CustomSculptures,
        Category::Decorative,
    ];

    /// URL-safe identifier, as used in query strings and the catalog file.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Category::BuddhaStatues => "buddha-statues",
            Category::CustomSculptures => "custom-sculptures",
            Category::Decorative => "decorative",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Category::BuddhaStatues => "Buddha Statues",
            Category::CustomSculptures => "Custom Sculptures",
            Category::Decorative => "Decorative Art",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownCategory(trimmed.to_string()))
    }
}

/// A purchasable size tier, e.g. `"3 ft"` at 85000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub label: String,
    /// Whole currency units.
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// URL slug, unique within the catalog.
    pub id: String,
    pub name: String,
    pub description: String,
    pub material: Material,
    pub category: Category,
    /// Listed in ascending price order by convention; never relied upon.
    pub sizes: Vec<Size>,
    pub finishes: Vec<String>,
    pub delivery_time: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Lowest size price, or `None` when the product has no sizes.
    #[must_use]
    pub fn min_price(&self) -> Option<u64> {
        self.sizes.iter().map(|s| s.price).min()
    }

    /// Highest size price, or `None` when the product has no sizes.
    #[must_use]
    pub fn max_price(&self) -> Option<u64> {
        self.sizes.iter().map(|s| s.price).max()
    }

    #[must_use]
    pub fn size(&self, label: &str) -> Option<&Size> {
        self.sizes.iter().find(|s| s.label == label)
    }

    /// The finish to make the piece in: `requested` when the product offers it,
    /// otherwise the first listed finish when nothing was requested.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownFinish` when `requested` is not one of the
    /// product's finishes.
    pub fn select_finish(&self, requested: Option<&str>) -> Result<Option<&str>, CoreError> {
        match requested.map(str::trim) {
            None | Some("") => Ok(self.finishes.first().map(String::as_str)),
            Some(name) => self
                .finishes
                .iter()
                .find(|f| f.as_str() == name)
                .map(|f| Some(f.as_str()))
                .ok_or_else(|| CoreError::UnknownFinish {
                    product_id: self.id.clone(),
                    finish: name.to_string(),
                }),
        }
    }

    /// The first listed image, used for cards and thumbnails.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
