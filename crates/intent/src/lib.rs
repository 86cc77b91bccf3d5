//! Navigation intent primitives.
//!
//! This crate provides the leaf data carried alongside every navigation request:
//! - [`PayloadValue`]: The primitive value kinds a host can transport
//! - [`PayloadBundle`]: Key-value container, last write wins
//! - [`NavigationFlags`]: Host navigation flag bitmask
//! - [`PayloadError`]: Rejected payload writes

mod error;
mod flags;
mod payload;

pub use error::{PayloadError, Result};
pub use flags::NavigationFlags;
pub use payload::{PayloadBundle, PayloadValue};
