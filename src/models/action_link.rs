use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    #[default]
    Button,
    Link,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionColor {
    #[default]
    Blue,
    Orange,
    White,
}

/// Call-to-action attached to a feature item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    pub label: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: ActionKind,
    #[serde(default)]
    pub color: ActionColor,
    /// Trailing arrow glyph.
    #[serde(default)]
    pub icon: bool,
}

impl ActionLink {
    pub fn href(&self) -> &str {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("/")
    }
}
