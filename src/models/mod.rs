pub use action_link::*;
pub use feature_item::*;
pub use icon_name::*;
pub use page::*;

mod action_link;
mod feature_item;
mod icon_name;
mod page;
