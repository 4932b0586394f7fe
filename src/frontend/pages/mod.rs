//! Page components

mod content;
mod not_found;

pub use content::{ContentPage, PageBlocks};
pub use not_found::NotFound;
