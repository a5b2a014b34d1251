//! Wire models for the non-shelf resources.
//!
//! Shelf models live in the `store` crate next to the store that holds
//! them; they are re-exported from the crate root alongside these.

mod http;
mod link;
mod section;

pub use http::ApiMessage;
pub use link::{Link, LinkBase};
pub use section::{Section, SectionBase};
