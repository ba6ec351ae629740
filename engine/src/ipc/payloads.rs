use serde::{Deserialize, Serialize};

use crate::core::captioning::ImageInput;
use crate::core::service::CaptionRequest;
use crate::core::{CoreError, CoreResult};

/// Style preselected in the front-end
pub const DEFAULT_STYLE: &str = "Aesthetic";

/// Font style preselected in the front-end
pub const DEFAULT_FONT_STYLE: &str = "Normal";

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_font_style() -> String {
    DEFAULT_FONT_STYLE.to_string()
}

fn default_language() -> String {
    crate::core::languages::DEFAULT_LANGUAGE.to_string()
}

/// Generate-caption request from the front-end.
///
/// Exactly one of `imagePath` / `imageBytes` must be set.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCaptionPayload {
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub image_bytes: Option<Vec<u8>>,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_font_style", alias = "font")]
    pub font_style: String,
    #[serde(default = "default_language", alias = "lang")]
    pub language: String,
}

impl GenerateCaptionPayload {
    /// Payload for an image on disk with default options
    pub fn from_path(path: &str) -> Self {
        Self {
            image_path: Some(path.to_string()),
            image_bytes: None,
            style: default_style(),
            font_style: default_font_style(),
            language: default_language(),
        }
    }

    pub fn to_request(&self) -> CaptionRequest {
        CaptionRequest::new(&self.style, &self.font_style, &self.language)
    }

    /// Resolves the image source
    pub async fn load_image(&self) -> CoreResult<ImageInput> {
        match (&self.image_path, &self.image_bytes) {
            (Some(_), Some(_)) => Err(CoreError::InvalidRequest(
                "Provide either imagePath or imageBytes, not both".to_string(),
            )),
            (Some(path), None) => {
                if path.trim().is_empty() {
                    return Err(CoreError::InvalidRequest(
                        "Image path is empty".to_string(),
                    ));
                }
                ImageInput::from_path(path).await
            }
            (None, Some(bytes)) => ImageInput::from_bytes(bytes.clone()),
            (None, None) => Err(CoreError::InvalidRequest(
                "An image is required".to_string(),
            )),
        }
    }
}

/// Generated caption
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCaptionResponse {
    pub caption: String,
}

/// Choices offered by the front-end, in display order
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaptionOptionsDto {
    pub styles: Vec<String>,
    pub font_styles: Vec<String>,
    pub languages: Vec<String>,
    pub default_style: String,
    pub default_font_style: String,
    pub default_language: String,
}
