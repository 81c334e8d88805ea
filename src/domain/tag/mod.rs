pub mod entity;
pub mod services;
pub mod value_objects;

pub use entity::Tag;
pub use services::{TagManager, TagReconciliation, parse_tag_string};
pub use value_objects::{TagId, TagName};
