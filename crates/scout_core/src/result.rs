use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{result_filename, Format};

/// `chrono` pattern for capture timestamps, e.g. `20240101_120000`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Capture time at second resolution, kept in its rendered form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self(at.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        let at = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)?;
        Ok(Self::from_datetime(at))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the remote side reported success. Absence is kept distinct from `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum SuccessFlag {
    Succeeded,
    Failed,
    Unknown,
}

impl From<Option<bool>> for SuccessFlag {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => SuccessFlag::Succeeded,
            Some(false) => SuccessFlag::Failed,
            None => SuccessFlag::Unknown,
        }
    }
}

impl From<SuccessFlag> for Option<bool> {
    fn from(value: SuccessFlag) -> Self {
        match value {
            SuccessFlag::Succeeded => Some(true),
            SuccessFlag::Failed => Some(false),
            SuccessFlag::Unknown => None,
        }
    }
}

impl fmt::Display for SuccessFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuccessFlag::Succeeded => write!(f, "true"),
            SuccessFlag::Failed => write!(f, "false"),
            SuccessFlag::Unknown => write!(f, "unknown"),
        }
    }
}

/// Outcome of converting the extraction payload; at most one of the two keys is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Extraction {
    #[serde(rename = "extracted_data")]
    Data(Map<String, Value>),
    #[serde(rename = "extraction_error")]
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub company: String,
    pub timestamp: Timestamp,
    pub url: String,
    pub success: SuccessFlag,
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<Format, String>>,
    #[serde(flatten)]
    pub extraction: Option<Extraction>,
}

impl DataRecord {
    pub fn extracted_data(&self) -> Option<&Map<String, Value>> {
        match &self.extraction {
            Some(Extraction::Data(map)) => Some(map),
            _ => None,
        }
    }

    pub fn extraction_error(&self) -> Option<&str> {
        match &self.extraction {
            Some(Extraction::Error(message)) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub company: String,
    pub timestamp: Timestamp,
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Data,
    Error,
}

impl RecordKind {
    /// Filename infix.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Data => "data",
            RecordKind::Error => "error",
        }
    }
}

/// Normalized, persisted outcome of one fetch attempt.
///
/// Serialized untagged: the file holds the record's fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FetchResult {
    // Tried first when reading back: only error records carry `error`.
    Error(ErrorRecord),
    Data(DataRecord),
}

impl FetchResult {
    pub fn kind(&self) -> RecordKind {
        match self {
            FetchResult::Data(_) => RecordKind::Data,
            FetchResult::Error(_) => RecordKind::Error,
        }
    }

    pub fn company(&self) -> &str {
        match self {
            FetchResult::Data(record) => &record.company,
            FetchResult::Error(record) => &record.company,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchResult::Data(record) => &record.url,
            FetchResult::Error(record) => &record.url,
        }
    }

    pub fn timestamp(&self) -> &Timestamp {
        match self {
            FetchResult::Data(record) => &record.timestamp,
            FetchResult::Error(record) => &record.timestamp,
        }
    }

    /// `{company}_{data|error}_{timestamp}.json`
    pub fn filename(&self) -> String {
        result_filename(self.company(), self.kind(), self.timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_renders_at_second_resolution() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(12, 0, 5, 999)
            .unwrap();
        assert_eq!(Timestamp::from_datetime(at).as_str(), "20240101_120005");
        assert_eq!(Timestamp::parse("20240101_120005").unwrap().as_str(), "20240101_120005");
        assert!(Timestamp::parse("2024-01-01").is_err());
    }

    #[test]
    fn success_flag_serializes_as_nullable_bool() {
        assert_eq!(serde_json::to_string(&SuccessFlag::Succeeded).unwrap(), "true");
        assert_eq!(serde_json::to_string(&SuccessFlag::Failed).unwrap(), "false");
        assert_eq!(serde_json::to_string(&SuccessFlag::Unknown).unwrap(), "null");
        assert_eq!(SuccessFlag::Unknown.to_string(), "unknown");
    }
}
