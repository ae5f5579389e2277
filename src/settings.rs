use crate::content::records::ContentKind;
use serde::{Deserialize, Serialize};

/// Limits applied to a single uploaded image.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct UploadLimits {
    /// Longest output dimension in pixels; larger inputs are downscaled.
    pub max_dimension: u32,
    /// Quality factor for the fixed JPEG output encoding.
    pub jpeg_quality: u8,
    /// Maximum raw input size, checked before any decode work.
    pub max_raw_bytes: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_dimension: 1920,
            jpeg_quality: 85,
            max_raw_bytes: 20 * 1024 * 1024,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    pub upload: UploadLimits,
    /// Media capacity of a quick-note draft.
    pub note_media_capacity: usize,
    /// Media capacity of a review draft.
    pub review_media_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upload: UploadLimits::default(),
            note_media_capacity: 5,
            review_media_capacity: 10,
        }
    }
}

impl Settings {
    /// Deserializes the `settings` section of the application configuration.
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// Returns an error if `value` does not match the expected structure.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }

    #[must_use]
    pub fn media_capacity(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Note => self.note_media_capacity,
            ContentKind::Review => self.review_media_capacity,
        }
    }
}
