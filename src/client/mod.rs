//! Geolocation service client
//!
//! `GeoClient` turns an optional target (IP address or host name) into one
//! blocking GET against the ip-api.com JSON endpoint and decodes the answer
//! into a [`LocationRecord`]. Every failure along the way is reported as
//! [`GeoError::LookupFailure`] with the underlying cause's message.
//!
//! The service reports problems such as an invalid query as a regular
//! `200 OK` body with `"status": "fail"`, so the HTTP status code is not
//! inspected: whatever JSON comes back is decoded and handed to the caller.

pub mod endpoint;

pub use endpoint::Endpoint;

use crate::config::ServiceConfig;
use crate::entity::LocationRecord;
use crate::error::{GeoError, Result};
use once_cell::sync::OnceCell;
use reqwest::Url;
use std::time::Duration;

/// Client for the ip-api.com geolocation service
///
/// The client keeps no per-call state. It can be shared between threads and
/// called concurrently; each call is an independent request.
#[derive(Debug, Clone)]
pub struct GeoClient {
    endpoint: Endpoint,
    http: reqwest::blocking::Client,
}

impl GeoClient {
    /// Create a client for the default endpoint
    pub fn new() -> Result<Self> {
        Self::with_config(&ServiceConfig::default())
    }

    /// Create a client from service configuration
    pub fn with_config(config: &ServiceConfig) -> Result<Self> {
        let endpoint = Endpoint::parse(&config.endpoint)?;

        if config.timeout_secs == 0 {
            return Err(GeoError::config("Request timeout must be at least 1 second"));
        }

        let mut builder =
            reqwest::blocking::Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if let Some(ref proxy) = config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str())
                .map_err(|e| GeoError::config(format!("Invalid proxy {:?}: {}", proxy, e)))?;
            builder = builder.proxy(proxy);
        }

        let http = builder
            .build()
            .map_err(|e| GeoError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { endpoint, http })
    }

    /// Base endpoint every request is built from
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// URL a lookup for `target` would request
    pub fn request_url(&self, target: Option<&str>) -> Result<Url> {
        self.endpoint.url_for(target)
    }

    /// Look up the location of `target`, or of the caller's own public
    /// address when `target` is `None`
    ///
    /// The target is not validated locally; the service decides whether it
    /// is a usable IP address or host name.
    pub fn lookup(&self, target: Option<&str>) -> Result<LocationRecord> {
        let url = self.request_url(target)?;
        log::debug!("Requesting {}", url);

        let response = self.http.get(url.clone()).send().map_err(|e| {
            log::debug!("Request to {} failed: {}", url, e);
            GeoError::lookup(e.to_string())
        })?;

        log::debug!("Response status: {}", response.status());

        let bytes = response
            .bytes()
            .map_err(|e| GeoError::lookup(format!("Failed to read response body: {}", e)))?;
        let body = String::from_utf8(bytes.to_vec())
            .map_err(|e| GeoError::lookup(format!("Response body is not valid UTF-8: {}", e)))?;

        LocationRecord::from_json(&body).map_err(|e| {
            log::debug!("Undecodable response body: {}", body);
            GeoError::lookup(format!("Failed to decode response: {}", e))
        })
    }

    /// Look up the location of the caller's own public address
    pub fn lookup_self(&self) -> Result<LocationRecord> {
        self.lookup(None)
    }
}

static DEFAULT_CLIENT: OnceCell<GeoClient> = OnceCell::new();

/// Process-wide client built from the default configuration on first use
pub(crate) fn default_client() -> Result<&'static GeoClient> {
    DEFAULT_CLIENT.get_or_try_init(GeoClient::new)
}

/// Look up `target` with the process-wide default client
pub fn lookup(target: Option<&str>) -> Result<LocationRecord> {
    default_client()?.lookup(target)
}
