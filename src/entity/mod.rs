//! Location record model and output formatting
//!
//! This module holds the decoded geolocation answer and the renderings
//! the command-line tool prints.

pub mod formatter;
pub mod types;

pub use types::*;
