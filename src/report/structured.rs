use std::path::Path;

use serde::Deserialize;

use super::{read_report, ReportError, SubdomainRecord};

/// Name used for records without one.
pub const DEFAULT_RECORD_NAME: &str = "N/A";

/// Scanner record. Every field is optional and unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    addresses: Option<Vec<RawAddress>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAddress {
    #[serde(default)]
    ip: Option<String>,
}

impl From<RawRecord> for SubdomainRecord {
    fn from(raw: RawRecord) -> Self {
        let addresses = raw
            .addresses
            .unwrap_or_default()
            .into_iter()
            .filter_map(|addr| addr.ip)
            .filter(|ip| !ip.is_empty())
            .collect();
        SubdomainRecord {
            name: raw.name.unwrap_or_else(|| DEFAULT_RECORD_NAME.to_string()),
            addresses,
        }
    }
}

/// Parse a structured report into records, in document order.
/// A valid but empty document (`[]` or `null`) yields no records.
pub fn parse_structured_report(structured_path: &Path) -> Result<Vec<SubdomainRecord>, ReportError> {
    let content = read_report(structured_path)?;
    let raw: Option<Vec<RawRecord>> = serde_json::from_str(&content)
        .map_err(|e| ReportError::Malformed(structured_path.to_path_buf(), e))?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(SubdomainRecord::from)
        .collect())
}
