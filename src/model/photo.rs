use serde::{Deserialize, Serialize};
use validator::Validate;

/// A gallery picture attached to an edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: u32,
    pub edition_id: u32,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub photographer: Option<String>,
    #[serde(default)]
    pub position: u32,
}

/// Registers an already-hosted picture. Uploading the file itself is not handled here.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRequest {
    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub url: String,

    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[validate(length(max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}
