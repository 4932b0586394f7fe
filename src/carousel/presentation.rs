use super::state::ViewportClass;

const COMMON_ITEM_CLASSES: &str = "transition duration-500 hover:scale-105 hover:z-20";
const EMPHASIS_ITEM_CLASSES: &str = "group block bg-gradient-to-br from-white/25 via-white/50 to-white/75 shadow-[inset_0_0_0_1px_rgba(223,219,252,0.15),_0_0_1px_1px_rgba(223,219,252,0.5)] pl-4 pr-8 md:py-9 md:pr-11 lg:py-12 lg:pr-14 rounded-2xl";
const PLAIN_ITEM_CLASSES: &str = "pl-4";

const ICON_CLASSES: &str = "text-xl md:text-3xl";
const HEADLINE_CLASSES: &str = "text-xl md:text-3xl font-tuner leading-tight pl-8";

/// How a single feature item is drawn for the current carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPresentation {
    /// Large viewport, currently highlighted.
    Highlighted,
    /// Large viewport, not highlighted: icon and headline only.
    Collapsed,
    /// Compact viewport: everything shown, no rotation.
    Stacked,
}

impl ItemPresentation {
    pub fn resolve(viewport: ViewportClass, is_highlighted: bool) -> Self {
        match (viewport, is_highlighted) {
            (ViewportClass::Compact, _) => Self::Stacked,
            (_, true) => Self::Highlighted,
            (_, false) => Self::Collapsed,
        }
    }

    /// Description, actions and inline media are visible.
    pub fn is_expanded(&self) -> bool {
        !matches!(self, Self::Collapsed)
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, Self::Highlighted)
    }

    pub fn accepts_hover(&self) -> bool {
        !matches!(self, Self::Stacked)
    }

    pub fn container_class(&self) -> String {
        let variant = if self.is_emphasized() {
            EMPHASIS_ITEM_CLASSES
        } else {
            PLAIN_ITEM_CLASSES
        };
        format!("{} {}", variant, COMMON_ITEM_CLASSES)
    }

    pub fn icon_class(&self) -> String {
        if self.is_emphasized() {
            format!("{} text-orange-500/90", ICON_CLASSES)
        } else {
            ICON_CLASSES.to_string()
        }
    }

    pub fn headline_class(&self) -> String {
        if self.is_emphasized() {
            format!(
                "{} text-transparent bg-gradient-to-br from-orange-400 via-orange-500 to-orange-600 bg-clip-text",
                HEADLINE_CLASSES
            )
        } else {
            HEADLINE_CLASSES.to_string()
        }
    }
}
