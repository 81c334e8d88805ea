// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod in_memory;
pub mod time;

pub use in_memory::InMemoryBlog;
pub use time::{SteppingClock, fixed_now};
