//! Platform-independent logic behind the carousel feature block.

mod controller;
mod media;
mod presentation;
mod scheduler;
mod state;

pub use controller::{CarouselController, ADVANCE_INTERVAL};
pub use media::{resolve_media, MediaHost, VideoMedia, DEFAULT_MEDIA_HOST};
pub use presentation::ItemPresentation;
pub use scheduler::Scheduler;
pub use state::{next_index, CarouselState, ViewportClass, LARGE_BREAKPOINT_PX};
