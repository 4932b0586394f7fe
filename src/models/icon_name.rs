use serde::{Deserialize, Deserializer, Serialize};

/// Icons a feature item may reference by name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum IconName {
    FaClock,
    FaUnlock,
    FaCodeBranch,
    FaCloudDownloadAlt,
    FaPuzzlePiece,
    FaMarkdown,
    FaGithub,
    FaFileAlt,
}

impl IconName {
    pub const ALL: [IconName; 8] = [
        Self::FaClock,
        Self::FaUnlock,
        Self::FaCodeBranch,
        Self::FaCloudDownloadAlt,
        Self::FaPuzzlePiece,
        Self::FaMarkdown,
        Self::FaGithub,
        Self::FaFileAlt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FaClock => "FaClock",
            Self::FaUnlock => "FaUnlock",
            Self::FaCodeBranch => "FaCodeBranch",
            Self::FaCloudDownloadAlt => "FaCloudDownloadAlt",
            Self::FaPuzzlePiece => "FaPuzzlePiece",
            Self::FaMarkdown => "FaMarkdown",
            Self::FaGithub => "FaGithub",
            Self::FaFileAlt => "FaFileAlt",
        }
    }

    /// Font Awesome 6 classes for the glyph.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::FaClock => "fa-solid fa-clock",
            Self::FaUnlock => "fa-solid fa-unlock",
            Self::FaCodeBranch => "fa-solid fa-code-branch",
            Self::FaCloudDownloadAlt => "fa-solid fa-cloud-arrow-down",
            Self::FaPuzzlePiece => "fa-solid fa-puzzle-piece",
            Self::FaMarkdown => "fa-brands fa-markdown",
            Self::FaGithub => "fa-brands fa-github",
            Self::FaFileAlt => "fa-solid fa-file-lines",
        }
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IconName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s.trim())
            .ok_or_else(|| format!("unknown icon name: {}", s))
    }
}

/// Deserializes an optional icon name, dropping names outside the icon set.
pub fn deserialize_known_icon<'de, D>(
    deserializer: D,
) -> Result<Option<IconName>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| match s.parse::<IconName>() {
            Ok(icon) => Some(icon),
            Err(e) => {
                log::warn!("Ignoring feature icon: {}", e);
                None
            }
        }))
}
