use std::fmt;

use serde_json::Value;

use crate::{
    Converter, DataRecord, ErrorRecord, Extraction, FetchResult, RemoteResponse, Subject,
    SuccessFlag, Timestamp,
};

/// Shape the outcome of one remote call into a [`FetchResult`].
///
/// A failed call becomes an error record carrying the error's text. Otherwise
/// every response part is read independently, and a payload that `convert`
/// rejects is kept as `extraction_error` next to the success flag and
/// metadata already gathered. A null or empty-object payload counts as no
/// extraction at all.
pub fn normalize<E: fmt::Display>(
    subject: &Subject,
    timestamp: Timestamp,
    outcome: Result<RemoteResponse, E>,
    convert: Converter,
) -> FetchResult {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => {
            return FetchResult::Error(ErrorRecord {
                company: subject.name().to_string(),
                timestamp,
                url: subject.url().to_string(),
                error: err.to_string(),
            });
        }
    };

    let success = SuccessFlag::from(response.success);
    let content = if response.content.is_empty() {
        None
    } else {
        Some(response.content)
    };

    let extraction = match response.extract {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) if map.is_empty() => None,
        Some(_) if success == SuccessFlag::Failed => None,
        Some(payload) => Some(match convert(payload) {
            Ok(map) => Extraction::Data(map),
            Err(err) => Extraction::Error(err.to_string()),
        }),
    };

    FetchResult::Data(DataRecord {
        company: subject.name().to_string(),
        timestamp,
        url: subject.url().to_string(),
        success,
        metadata: response.metadata,
        content,
        extraction,
    })
}
