use serde::{Deserialize, Serialize};

use super::FeatureItem;
use crate::common::ContentError;

/// A page document: an ordered list of content blocks.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blocks: Vec<PageBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_template", rename_all = "camelCase")]
pub enum PageBlock {
    CarouselFeature(CarouselFeatureData),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselFeatureData {
    #[serde(default)]
    pub items: Vec<FeatureItem>,
}

impl Page {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }
}
