use std::time::Duration;

use super::scheduler::Scheduler;
use super::state::{next_index, CarouselState, ViewportClass};

/// Cadence of the auto-advance timer.
pub const ADVANCE_INTERVAL: Duration = Duration::from_millis(3000);

/// Rotation state machine for one mounted carousel block.
///
/// The controller owns at most one pending timer: starting a timer always
/// cancels the previous handle first, and dropping the controller cancels
/// whatever is still pending.
pub struct CarouselController<S: Scheduler> {
    state: CarouselState,
    item_count: usize,
    scheduler: S,
    timer: Option<S::Handle>,
    torn_down: bool,
}

impl<S: Scheduler> CarouselController<S> {
    pub fn new(item_count: usize, scheduler: S) -> Self {
        Self {
            state: CarouselState::default(),
            item_count,
            scheduler,
            timer: None,
            torn_down: false,
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_timer_pending(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// First measurement after mount.
    pub fn measure(&mut self, viewport: ViewportClass) {
        if self.torn_down {
            return;
        }

        self.state.viewport = viewport;
        if viewport.is_large() && !self.state.paused {
            self.arm();
        }
    }

    pub fn on_viewport_change(&mut self, viewport: ViewportClass) {
        if self.torn_down || viewport == self.state.viewport {
            return;
        }

        self.state.viewport = viewport;
        match viewport {
            ViewportClass::Compact | ViewportClass::Unmeasured => {
                self.disarm();
                self.state.highlighted = None;
                self.state.paused = false;
            }
            ViewportClass::Large => {
                if !self.state.paused {
                    self.arm();
                }
            }
        }
    }

    pub fn on_tick(&mut self) {
        if self.torn_down || self.state.paused || !self.state.is_large_viewport() {
            return;
        }

        self.state.highlighted = next_index(self.state.highlighted, self.item_count);
    }

    pub fn on_pointer_enter(&mut self, index: usize) {
        if self.torn_down || !self.state.is_large_viewport() || index >= self.item_count {
            return;
        }

        self.state.paused = true;
        self.disarm();
        self.state.highlighted = Some(index);
    }

    pub fn on_pointer_leave(&mut self) {
        if self.torn_down || !self.state.paused {
            return;
        }

        self.state.paused = false;
        if self.state.is_large_viewport() {
            self.arm();
        }
    }

    /// The block received a different item list.
    pub fn set_item_count(&mut self, item_count: usize) {
        if self.torn_down || item_count == self.item_count {
            return;
        }

        self.item_count = item_count;
        if self.state.highlighted.is_some_and(|i| i >= item_count) {
            self.state.highlighted = None;
        }
        if self.state.is_large_viewport() && !self.state.paused {
            self.arm();
        }
    }

    pub fn teardown(&mut self) {
        self.disarm();
        self.torn_down = true;
    }

    fn arm(&mut self) {
        self.disarm();
        self.timer = self.scheduler.start(ADVANCE_INTERVAL);
        if self.timer.is_none() {
            log::warn!("Carousel auto-advance timer could not be started");
        }
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for CarouselController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
