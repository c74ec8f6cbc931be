//! Location record returned by the geolocation service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status value the service reports for a resolved query
pub const STATUS_SUCCESS: &str = "success";

/// One geolocation answer
///
/// Every attribute is optional: the service only fills in what it knows, and
/// keys the record does not recognize are dropped while decoding. Fields are
/// private so a record cannot change after it has been decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,

    /// Failure reason, only sent together with status "fail"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    country_code: Option<String>,

    /// Short region code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    region_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    zip: Option<String>,

    #[serde(rename = "lat", default, skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,

    #[serde(rename = "lon", default, skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    isp: Option<String>,

    #[serde(rename = "org", default, skip_serializing_if = "Option::is_none")]
    organization: Option<String>,

    /// AS number and name, e.g. "AS15169 Google LLC"
    #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
    as_info: Option<String>,

    /// IP address the service resolved the query to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<String>,
}

impl LocationRecord {
    /// Decode a record from a JSON response body
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn region_name(&self) -> Option<&str> {
        self.region_name.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn isp(&self) -> Option<&str> {
        self.isp.as_deref()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn as_info(&self) -> Option<&str> {
        self.as_info.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Check whether the service reported the query as resolved
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }

    /// Populated attributes as (label, value) pairs, in service order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("status", &self.status),
            ("message", &self.message),
            ("country", &self.country),
            ("countryCode", &self.country_code),
            ("region", &self.region),
            ("regionName", &self.region_name),
            ("city", &self.city),
            ("zip", &self.zip),
        ];
        let tail = [
            ("timezone", &self.timezone),
            ("isp", &self.isp),
            ("org", &self.organization),
            ("as", &self.as_info),
            ("query", &self.query),
        ];

        let mut fields: Vec<(&'static str, String)> = text
            .iter()
            .filter_map(|(label, value)| value.as_ref().map(|v| (*label, v.clone())))
            .collect();

        if let Some(lat) = self.latitude {
            fields.push(("lat", lat.to_string()));
        }
        if let Some(lon) = self.longitude {
            fields.push(("lon", lon.to_string()));
        }

        fields.extend(
            tail.iter()
                .filter_map(|(label, value)| value.as_ref().map(|v| (*label, v.clone()))),
        );

        fields
    }
}

impl fmt::Display for LocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::formatter::format_text(self, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = r#"{
        "status": "success",
        "country": "United States",
        "countryCode": "US",
        "region": "VA",
        "regionName": "Virginia",
        "city": "Ashburn",
        "zip": "20149",
        "lat": 39.03,
        "lon": -77.5,
        "timezone": "America/New_York",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "as": "AS15169 Google LLC",
        "query": "8.8.8.8"
    }"#;

    #[test]
    fn test_decode_all_fields() {
        let record = LocationRecord::from_json(FULL_BODY).unwrap();

        assert_eq!(record.status(), Some("success"));
        assert_eq!(record.country(), Some("United States"));
        assert_eq!(record.country_code(), Some("US"));
        assert_eq!(record.region(), Some("VA"));
        assert_eq!(record.region_name(), Some("Virginia"));
        assert_eq!(record.city(), Some("Ashburn"));
        assert_eq!(record.zip(), Some("20149"));
        assert_eq!(record.latitude(), Some(39.03));
        assert_eq!(record.longitude(), Some(-77.5));
        assert_eq!(record.timezone(), Some("America/New_York"));
        assert_eq!(record.isp(), Some("Google LLC"));
        assert_eq!(record.organization(), Some("Google Public DNS"));
        assert_eq!(record.as_info(), Some("AS15169 Google LLC"));
        assert_eq!(record.query(), Some("8.8.8.8"));
        assert_eq!(record.message(), None);
        assert!(record.is_success());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = r#"{"status":"success","country":"Germany","mobile":false,"asname":"DTAG","extra":{"nested":[1,2]}}"#;
        let record = LocationRecord::from_json(body).unwrap();

        assert_eq!(record.country(), Some("Germany"));
        assert_eq!(record.city(), None);
        assert_eq!(record.fields().len(), 2);
    }

    #[test]
    fn test_missing_fields_stay_unset() {
        let body = r#"{"status":"success","country":"United States","query":"8.8.8.8"}"#;
        let record = LocationRecord::from_json(body).unwrap();

        assert_eq!(record.country(), Some("United States"));
        assert_eq!(record.query(), Some("8.8.8.8"));
        assert_eq!(record.country_code(), None);
        assert_eq!(record.region(), None);
        assert_eq!(record.region_name(), None);
        assert_eq!(record.city(), None);
        assert_eq!(record.zip(), None);
        assert_eq!(record.latitude(), None);
        assert_eq!(record.longitude(), None);
        assert_eq!(record.timezone(), None);
        assert_eq!(record.isp(), None);
        assert_eq!(record.organization(), None);
        assert_eq!(record.as_info(), None);
    }

    #[test]
    fn test_empty_object_and_nulls() {
        let record = LocationRecord::from_json("{}").unwrap();
        assert_eq!(record, LocationRecord::default());

        let record = LocationRecord::from_json(r#"{"city":null,"lat":null}"#).unwrap();
        assert_eq!(record.city(), None);
        assert_eq!(record.latitude(), None);
    }

    #[test]
    fn test_fail_status() {
        let body = r#"{"status":"fail","message":"invalid query","query":"no such host"}"#;
        let record = LocationRecord::from_json(body).unwrap();

        assert!(!record.is_success());
        assert_eq!(record.message(), Some("invalid query"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(LocationRecord::from_json("<html>oops</html>").is_err());
        assert!(LocationRecord::from_json(r#"{"status":"success""#).is_err());
        assert!(LocationRecord::from_json(r#"{"lat":"north"}"#).is_err());
    }

    #[test]
    fn test_serialize_uses_service_keys() {
        let record = LocationRecord::from_json(FULL_BODY).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["countryCode"], "US");
        assert_eq!(json["org"], "Google Public DNS");
        assert_eq!(json["as"], "AS15169 Google LLC");
        assert_eq!(json["lat"], 39.03);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_display_lists_populated_fields() {
        let body = r#"{"status":"success","country":"United States","query":"8.8.8.8"}"#;
        let record = LocationRecord::from_json(body).unwrap();
        let text = record.to_string();

        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("country : United States"));
        assert!(text.contains("query   : 8.8.8.8"));
        assert!(!text.contains("city"));
    }
}
