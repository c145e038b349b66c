//! Contact and custom-order form payloads.
//!
//! Submissions are never stored or forwarded. Validation runs, the caller
//! simulates a short processing delay, and an [`Acknowledgement`] is shown.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Upper bound for a single reference image upload.
pub const MAX_REFERENCE_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

/// The notification shown after a simulated submission succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub title: String,
    pub description: String,
}

impl Acknowledgement {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatueType {
    #[serde(rename = "Seated Buddha")]
    SeatedBuddha,
    #[serde(rename = "Standing Buddha")]
    StandingBuddha,
    #[serde(rename = "Buddha Head")]
    BuddhaHead,
    #[serde(rename = "Reclining Buddha")]
    RecliningBuddha,
    #[serde(rename = "Decorative Sculpture")]
    DecorativeSculpture,
    #[serde(rename = "Temple Grade")]
    TempleGrade,
    Other,
}

/// Materials offered on the custom-order form. Unlike the catalog's
/// [`crate::Material`], customers may ask for something else entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomMaterial {
    Dolomite,
    Fiber,
    Concrete,
    Other,
}

/// Metadata for an uploaded reference photo. The bytes themselves never
/// reach this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl ReferenceImage {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for non-image content or oversized files.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.content_type.starts_with("image/") {
            return Err(CoreError::validation(format!(
                "'{}' is not an image; please upload only image files",
                self.file_name
            )));
        }
        if self.size_bytes > MAX_REFERENCE_IMAGE_BYTES {
            return Err(CoreError::validation(format!(
                "'{}' is too large; images must be smaller than 5MB",
                self.file_name
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first missing or malformed field.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        validate_email(&self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        Ok(())
    }

    #[must_use]
    pub fn acknowledgement() -> Acknowledgement {
        Acknowledgement::new("Message Sent!", "We'll get back to you within 24 hours.")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomOrderRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub statue_type: StatueType,
    pub material: CustomMaterial,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference_images: Vec<ReferenceImage>,
}

impl CustomOrderRequest {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first missing or malformed
    /// field, or the first rejected reference image.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        validate_email(&self.email)?;
        require("phone", &self.phone)?;
        require("location", &self.location)?;
        for image in &self.reference_images {
            image.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn acknowledgement() -> Acknowledgement {
        Acknowledgement::new(
            "Request Submitted!",
            "We'll contact you within 24 hours with a quotation.",
        )
    }
}

pub(crate) fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn validate_email(value: &str) -> Result<(), CoreError> {
    require("email", value)?;
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(CoreError::validation(format!(
            "'{value}' is not a valid email address"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactMessage {
        ContactMessage {
            name: "Chaminda Perera".to_string(),
            email: "chaminda@example.lk".to_string(),
            phone: None,
            subject: "Garden statue".to_string(),
            message: "Do you deliver to Kandy?".to_string(),
        }
    }

    fn custom_order() -> CustomOrderRequest {
        CustomOrderRequest {
            name: "Anura Silva".to_string(),
            email: "anura@example.com".to_string(),
            phone: "+94 77 123 4567".to_string(),
            location: "Galle".to_string(),
            statue_type: StatueType::RecliningBuddha,
            material: CustomMaterial::Dolomite,
            height: Some("6 ft".to_string()),
            width: None,
            description: None,
            reference_images: vec![ReferenceImage {
                file_name: "sketch.png".to_string(),
                content_type: "image/png".to_string(),
                size_bytes: 200_000,
            }],
        }
    }

    #[test]
    fn valid_contact_message_passes() {
        assert!(contact().validate().is_ok());
    }

    #[test]
    fn contact_requires_subject() {
        let mut msg = contact();
        msg.subject = "  ".to_string();
        let err = msg.validate().unwrap_err();
        assert_eq!(err, CoreError::validation("subject is required"));
    }

    #[test]
    fn contact_rejects_malformed_email() {
        let mut msg = contact();
        msg.email = "not-an-email".to_string();
        assert!(msg
            .validate()
            .unwrap_err()
            .to_string()
            .contains("not a valid email"));
    }

    #[test]
    fn valid_custom_order_passes() {
        assert!(custom_order().validate().is_ok());
    }

    #[test]
    fn custom_order_requires_location() {
        let mut order = custom_order();
        order.location = String::new();
        assert_eq!(
            order.validate().unwrap_err(),
            CoreError::validation("location is required")
        );
    }

    #[test]
    fn reference_image_must_be_an_image() {
        let image = ReferenceImage {
            file_name: "plan.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            size_bytes: 1_000,
        };
        assert!(image
            .validate()
            .unwrap_err()
            .to_string()
            .contains("not an image"));
    }

    #[test]
    fn reference_image_size_limit_is_inclusive() {
        let mut image = ReferenceImage {
            file_name: "photo.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            size_bytes: MAX_REFERENCE_IMAGE_BYTES,
        };
        assert!(image.validate().is_ok());
        image.size_bytes += 1;
        assert!(image.validate().unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn custom_order_rejects_oversized_reference() {
        let mut order = custom_order();
        order.reference_images[0].size_bytes = 6 * 1024 * 1024;
        assert!(order.validate().is_err());
    }

    #[test]
    fn statue_type_uses_display_labels_on_the_wire() {
        let json = r#"{
            "name": "A", "email": "a@b.co", "phone": "1", "location": "Colombo",
            "statue_type": "Temple Grade", "material": "Other"
        }"#;
        let order: CustomOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(order.statue_type, StatueType::TempleGrade);
        assert_eq!(order.material, CustomMaterial::Other);
        assert!(order.reference_images.is_empty());
    }

    #[test]
    fn acknowledgements_match_site_copy() {
        assert_eq!(ContactMessage::acknowledgement().title, "Message Sent!");
        assert_eq!(
            CustomOrderRequest::acknowledgement().description,
            "We'll contact you within 24 hours with a quotation."
        );
    }
}
