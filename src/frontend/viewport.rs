use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::carousel::{ViewportClass, LARGE_BREAKPOINT_PX};

/// `(min-width: 1024px)`
pub fn large_query() -> String {
    format!("(min-width: {}px)", LARGE_BREAKPOINT_PX)
}

/// `(max-width: 1023px)`
pub fn compact_query() -> String {
    format!("(max-width: {}px)", LARGE_BREAKPOINT_PX - 1)
}

/// Live subscription to the large/compact media queries.
/// Dropping it removes both `change` listeners.
pub struct ViewportWatcher {
    large: MediaQueryList,
    compact: MediaQueryList,
    listener: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl ViewportWatcher {
    /// Returns `None` outside a browser window.
    pub fn attach(on_change: impl Fn(ViewportClass) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let large = window.match_media(&large_query()).ok().flatten()?;
        let compact = window.match_media(&compact_query()).ok().flatten()?;

        let (large_q, compact_q) = (large.clone(), compact.clone());
        let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |_: MediaQueryListEvent| {
                on_change(ViewportClass::from_predicates(
                    large_q.matches(),
                    compact_q.matches(),
                ))
            },
        );

        for list in [&large, &compact] {
            if let Err(e) = list.add_event_listener_with_callback(
                "change",
                listener.as_ref().unchecked_ref(),
            ) {
                log::warn!("Failed to watch media query: {:?}", e);
            }
        }

        Some(Self {
            large,
            compact,
            listener,
        })
    }

    pub fn current(&self) -> ViewportClass {
        ViewportClass::from_predicates(self.large.matches(), self.compact.matches())
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        for list in [&self.large, &self.compact] {
            let _ = list.remove_event_listener_with_callback(
                "change",
                self.listener.as_ref().unchecked_ref(),
            );
        }
    }
}
