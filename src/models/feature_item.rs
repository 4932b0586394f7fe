use serde::{Deserialize, Serialize};

use super::icon_name::deserialize_known_icon;
use super::{ActionLink, IconName};
use crate::common::sanitize_label;

/// One entry of a carousel feature block, as delivered by the content source.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub actions: Vec<ActionLink>,
    #[serde(default, deserialize_with = "deserialize_known_icon")]
    pub icon: Option<IconName>,
    #[serde(default)]
    pub video_src: Option<String>,
    /// Source location used by the live-editing overlay.
    #[serde(default, rename = "_editPath")]
    pub edit_path: Option<String>,
}

impl FeatureItem {
    pub fn headline(&self) -> Option<&str> {
        non_blank(self.headline.as_deref())
    }

    pub fn text(&self) -> Option<&str> {
        non_blank(self.text.as_deref())
    }

    pub fn video_src(&self) -> Option<&str> {
        non_blank(self.video_src.as_deref())
    }

    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Element id for the item at `index`. The index suffix keeps ids unique
    /// when headlines repeat; items without a usable headline fall back to
    /// `feature-item-<index>`.
    pub fn dom_id(&self, index: usize) -> String {
        match self.headline().map(sanitize_label) {
            Some(label) if !label.is_empty() => format!("{}-{}", label, index),
            _ => format!("feature-item-{}", index),
        }
    }

    /// Overlay reference for `field`, e.g. `blocks.0.items.2.headline`.
    pub fn field_ref(&self, field: &str) -> Option<String> {
        non_blank(self.edit_path.as_deref())
            .map(|path| format!("{}.{}", path, field))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
