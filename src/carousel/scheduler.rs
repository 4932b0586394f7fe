use std::time::Duration;

/// Source of repeating ticks for a [`CarouselController`](super::CarouselController).
///
/// A started timer keeps firing until its handle is passed back to
/// [`Scheduler::cancel`]. Implementations deliver ticks by calling
/// `on_tick` on the owning controller; they never call back synchronously
/// from `start`.
pub trait Scheduler {
    type Handle;

    /// Starts a repeating timer. `None` means the platform refused and no
    /// timer is pending.
    fn start(&mut self, period: Duration) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}
