use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

use crate::carousel::Scheduler;

/// [`Scheduler`] backed by the browser's `setInterval`.
pub struct IntervalScheduler {
    on_tick: Rc<dyn Fn()>,
}

impl IntervalScheduler {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn start(&mut self, period: Duration) -> Option<IntervalHandle> {
        let on_tick = Rc::clone(&self.on_tick);
        set_interval_with_handle(move || on_tick(), period)
            .map_err(|e| log::error!("setInterval failed: {:?}", e))
            .ok()
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        handle.clear();
    }
}
