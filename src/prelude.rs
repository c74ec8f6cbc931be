//! Core types and error handling
//!
//! This module re-exports commonly used types and traits for the geolocator crate.

pub use crate::client::GeoClient;
pub use crate::entity::LocationRecord;
pub use crate::error::{GeoError, Result};
pub use anyhow::{anyhow, Context};
pub use log::{debug, error, info, warn};
pub use serde::{Deserialize, Serialize};
