//! Request URL assembly
//!
//! The target is appended to the base endpoint as a single percent-encoded
//! path segment, so characters such as `/`, `?`, `#` and spaces can never
//! change the shape of the request.

use crate::error::{GeoError, Result};
use reqwest::Url;

/// Validated base endpoint of the geolocation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// Parse a base endpoint
    ///
    /// The URL must be absolute http(s) and able to carry path segments.
    /// A missing trailing slash is added so the bare endpoint and the
    /// target-specific URLs share the same directory.
    pub fn parse(base: &str) -> Result<Self> {
        let mut url = Url::parse(base)
            .map_err(|e| GeoError::config(format!("Invalid endpoint {:?}: {}", base, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(GeoError::config(format!(
                "Unsupported endpoint scheme: {}",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(GeoError::config(format!("Endpoint cannot carry a path: {}", base)));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { base: url })
    }

    /// The bare base endpoint
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Build the request URL for `target`
    ///
    /// `None` yields the bare endpoint. Empty and dot-segment targets (`.`
    /// and `..`) cannot travel as a path segment and are rejected.
    pub fn url_for(&self, target: Option<&str>) -> Result<Url> {
        let target = match target {
            None => return Ok(self.base.clone()),
            Some(t) if matches!(t, "" | "." | "..") => {
                return Err(GeoError::lookup(format!(
                    "Target {:?} cannot be sent as a URL path segment",
                    t
                )));
            }
            Some(t) => t,
        };

        let mut url = self.base.clone();
        let path = format!("{}{}", self.base.path(), encode_segment(target));
        url.set_path(&path);

        Ok(url)
    }
}

/// Characters left as-is inside a path segment: RFC 3986 unreserved marks,
/// sub-delims, `:` and `@`
const SEGMENT_SAFE: &str = "-._~!$&'()*+,;=:@";

/// Percent-encode `segment` so it stays one path segment byte for byte
///
/// Controls, whitespace, `/`, `?`, `#`, `%` and every other character
/// outside the safe set are escaped as UTF-8 octets.
pub fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    let mut buf = [0u8; 4];

    for c in segment.chars() {
        if c.is_ascii_alphanumeric() || SEGMENT_SAFE.contains(c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }

    encoded
}
