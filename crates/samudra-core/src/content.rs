use serde::{Deserialize, Serialize};

/// A completed work shown on the gallery page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub image: String,
    pub title: String,
    /// Free-form label such as `"Temple Projects"`; not a catalog [`crate::Category`].
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
}
