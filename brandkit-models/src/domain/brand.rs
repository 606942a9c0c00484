use serde::Deserialize;
use validator::Validate;

/// Payload for the one-time brand setup.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Payload for renaming the existing brand.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandName {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
