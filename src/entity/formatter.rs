//! Record formatter - formats location records for output

use crate::entity::types::LocationRecord;

#[cfg(feature = "colored-output")]
use colored::Colorize;

/// Format a record as aligned `label : value` lines
pub fn format_text(record: &LocationRecord, use_color: bool) -> String {
    let fields = record.fields();
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut result = String::new();
    for (label, value) in fields {
        let label = format!("{:<width$}", label, width = width);
        if use_color {
            #[cfg(feature = "colored-output")]
            {
                let value = if record.is_success() {
                    value.as_str().green()
                } else {
                    value.as_str().red()
                };
                result.push_str(&format!("{} : {}\n", label.as_str().cyan(), value));
            }
            #[cfg(not(feature = "colored-output"))]
            {
                result.push_str(&format!("{} : {}\n", label, value));
            }
        } else {
            result.push_str(&format!("{} : {}\n", label, value));
        }
    }

    result
}

/// Format a record as a single line, e.g. `8.8.8.8 -> United States Virginia Ashburn Google LLC`
pub fn format_compact(record: &LocationRecord) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(country) = record.country() {
        parts.push(country);
    }

    if let Some(region) = record.region_name() {
        if Some(region) != record.country() {
            parts.push(region);
        }
    }

    if let Some(city) = record.city() {
        if Some(city) != record.region_name() {
            parts.push(city);
        }
    }

    if let Some(isp) = record.isp() {
        parts.push(isp);
    }

    let info = if parts.is_empty() {
        record.message().unwrap_or("[Not found]").to_string()
    } else {
        parts.join(" ")
    };

    match record.query() {
        Some(query) => format!("{} -> {}", query, info),
        None => info,
    }
}

/// Format a record as pretty-printed JSON using the service's key names
pub fn format_json(record: &LocationRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}
