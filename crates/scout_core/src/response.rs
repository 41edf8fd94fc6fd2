use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Output format requested from the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Markdown,
    Html,
    /// Structured extraction driven by an [`ExtractionSchema`](crate::ExtractionSchema).
    Json,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Markdown => "markdown",
            Format::Html => "html",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What came back from the remote service, every part optional.
///
/// The service does not promise to populate any of these; callers match on
/// presence instead of assuming it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteResponse {
    pub success: Option<bool>,
    pub metadata: Option<Map<String, Value>>,
    /// Structured extraction payload, shaped by the schema if one was sent.
    pub extract: Option<Value>,
    /// Raw page content per requested format.
    pub content: BTreeMap<Format, String>,
}
