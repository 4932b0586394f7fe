use serde::{Deserialize, Serialize};

/// Width at which the carousel switches from the stacked layout to rotation.
pub const LARGE_BREAKPOINT_PX: u32 = 1024;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    /// Before the first layout pass (and always during SSR).
    #[default]
    Unmeasured,
    Large,
    Compact,
}

impl ViewportClass {
    /// Combines the `(min-width: 1024px)` and `(max-width: 1023px)` predicates.
    pub fn from_predicates(is_wide: bool, is_compact: bool) -> Self {
        match (is_wide, is_compact) {
            (true, _) => Self::Large,
            (false, true) => Self::Compact,
            (false, false) => Self::Unmeasured,
        }
    }

    pub fn is_large(&self) -> bool {
        matches!(self, Self::Large)
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub highlighted: Option<usize>,
    pub paused: bool,
    pub viewport: ViewportClass,
}

impl CarouselState {
    pub fn is_large_viewport(&self) -> bool {
        self.viewport.is_large()
    }

    pub fn is_compact_viewport(&self) -> bool {
        self.viewport.is_compact()
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted == Some(index)
    }
}

/// Forward wrap-around step over `item_count` items.
pub fn next_index(current: Option<usize>, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }

    match current {
        Some(i) if i + 1 < item_count => Some(i + 1),
        _ => Some(0),
    }
}
