//! Reusable UI components

mod actions;
mod alert;
mod carousel_feature;
mod carousel_item;
mod container;
mod footer;
mod nav;
mod video;

pub use actions::{action_id, Actions};
pub use alert::ErrorAlert;
pub use carousel_feature::CarouselFeatureBlock;
pub use carousel_item::CarouselItem;
pub use container::{Container, GradGlow};
pub use footer::Footer;
pub use nav::Nav;
pub use video::FeatureVideo;
