#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use blockpress::carousel::{CarouselController, Scheduler, ViewportClass};
use blockpress::models::*;

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_id: u64,
    // id -> (period, next due time)
    pending: BTreeMap<u64, (Duration, Duration)>,
    started: usize,
    cancelled: usize,
}

/// Deterministic scheduler driven by [`advance`]. Clones share one timeline,
/// so a test can keep inspecting it after handing a clone to a controller.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

impl ManualScheduler {
    pub fn pending_count(&self) -> usize {
        self.timeline.borrow().pending.len()
    }

    pub fn started(&self) -> usize {
        self.timeline.borrow().started
    }

    pub fn cancelled(&self) -> usize {
        self.timeline.borrow().cancelled
    }

    pub fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    fn next_due(&self, limit: Duration) -> Option<(u64, Duration)> {
        self.timeline
            .borrow()
            .pending
            .iter()
            .map(|(id, (_, due))| (*id, *due))
            .filter(|(_, due)| *due <= limit)
            .min_by_key(|(_, due)| *due)
    }

    fn fire(&self, id: u64) {
        let mut timeline = self.timeline.borrow_mut();
        if let Some((period, due)) = timeline.pending.get(&id).copied() {
            timeline.now = due;
            timeline.pending.insert(id, (period, due + period));
        }
    }

    fn set_now(&self, now: Duration) {
        self.timeline.borrow_mut().now = now;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn start(&mut self, period: Duration) -> Option<u64> {
        let mut timeline = self.timeline.borrow_mut();
        let id = timeline.next_id;
        let due = timeline.now + period;
        timeline.next_id += 1;
        timeline.started += 1;
        timeline.pending.insert(id, (period, due));
        Some(id)
    }

    fn cancel(&mut self, handle: u64) {
        let mut timeline = self.timeline.borrow_mut();
        if timeline.pending.remove(&handle).is_some() {
            timeline.cancelled += 1;
        }
    }
}

/// Scheduler whose platform never grants a timer.
pub struct RefusingScheduler;

impl Scheduler for RefusingScheduler {
    type Handle = ();

    fn start(&mut self, _period: Duration) -> Option<()> {
        None
    }

    fn cancel(&mut self, _handle: ()) {}
}

pub type TestController = CarouselController<ManualScheduler>;

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Moves the clock forward by `by`, delivering every due tick to `ctrl`.
/// Returns the highlighted index observed after each tick.
pub fn advance(
    ctrl: &mut TestController,
    clock: &ManualScheduler,
    by: Duration,
) -> Vec<Option<usize>> {
    let target = clock.now() + by;
    let mut seen = Vec::new();

    while let Some((id, _)) = clock.next_due(target) {
        clock.fire(id);
        ctrl.on_tick();
        seen.push(ctrl.state().highlighted);
        assert!(clock.pending_count() <= 1, "more than one timer pending");
    }
    clock.set_now(target);

    seen
}

pub fn large_controller(item_count: usize) -> (TestController, ManualScheduler) {
    let clock = ManualScheduler::default();
    let mut ctrl = CarouselController::new(item_count, clock.clone());
    ctrl.measure(ViewportClass::Large);
    (ctrl, clock)
}

pub fn compact_controller(item_count: usize) -> (TestController, ManualScheduler) {
    let clock = ManualScheduler::default();
    let mut ctrl = CarouselController::new(item_count, clock.clone());
    ctrl.measure(ViewportClass::Compact);
    (ctrl, clock)
}

pub fn get_item_with_video() -> FeatureItem {
    FeatureItem {
        headline: Some("Instant Preview".to_string()),
        text: Some("See edits live.".to_string()),
        actions: vec![ActionLink {
            label: "Learn more".to_string(),
            link: Some("/docs".to_string()),
            kind: ActionKind::Link,
            color: ActionColor::Blue,
            icon: true,
        }],
        icon: Some(IconName::FaClock),
        video_src: Some("demo123".to_string()),
        edit_path: Some("blocks.0.items.0".to_string()),
    }
}

pub fn get_item_without_video() -> FeatureItem {
    FeatureItem {
        headline: Some("Open Source".to_string()),
        icon: Some(IconName::FaGithub),
        ..Default::default()
    }
}
