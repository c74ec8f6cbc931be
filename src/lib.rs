//! geolocator: client for the ip-api.com IP geolocation service
//!
//! Builds the request URL for an optional IP address or host name, performs
//! one blocking HTTP GET and decodes the JSON answer into a [`LocationRecord`].
//!
//! ```no_run
//! let client = geolocator::GeoClient::new()?;
//! let record = client.lookup(Some("8.8.8.8"))?;
//! println!("{}", record);
//! # Ok::<(), geolocator::GeoError>(())
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod prelude;
pub mod utils;

pub use client::{lookup, Endpoint, GeoClient};
pub use config::{AppConfig, ServiceConfig};
pub use entity::LocationRecord;
pub use error::{GeoError, Result};
