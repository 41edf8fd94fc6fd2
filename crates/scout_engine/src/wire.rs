//! JSON shapes exchanged with the scrape endpoint.
//!
//! Responses are read field by field from a `serde_json::Value` so that a
//! missing or oddly typed field degrades to "absent" instead of failing the
//! whole decode.

use serde::Serialize;
use serde_json::{Map, Value};

use scout_core::{Format, RemoteResponse};

use crate::ScrapeRequest;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeBody<'a> {
    url: &'a str,
    formats: &'a [Format],
    #[serde(skip_serializing_if = "Option::is_none")]
    json_options: Option<JsonOptions<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOptions<'a> {
    schema: Value,
    mode: &'a str,
    page_options: PageOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageOptions {
    only_main_content: bool,
}

pub(crate) fn encode_request(url: &str, request: &ScrapeRequest) -> Result<Vec<u8>, serde_json::Error> {
    let body = ScrapeBody {
        url,
        formats: &request.formats,
        json_options: request.extraction.as_ref().map(|options| JsonOptions {
            schema: options.schema.to_json_schema(),
            mode: options.mode,
            page_options: PageOptions {
                only_main_content: options.only_main_content,
            },
        }),
    };
    serde_json::to_vec(&body)
}

/// API-level error message carried in a response body, if any.
pub(crate) fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

pub(crate) fn decode_response(body: &Value) -> RemoteResponse {
    let data = body.get("data").and_then(Value::as_object);

    let success = body.get("success").and_then(Value::as_bool);
    let metadata = data
        .and_then(|data| data.get("metadata"))
        .and_then(Value::as_object)
        .cloned();
    let extract = data
        .and_then(|data| data.get("json").or_else(|| data.get("extract")))
        .or_else(|| body.get("extract"))
        .cloned();

    let mut response = RemoteResponse {
        success,
        metadata,
        extract,
        ..RemoteResponse::default()
    };
    if let Some(data) = data {
        collect_content(data, &mut response);
    }
    response
}

fn collect_content(data: &Map<String, Value>, response: &mut RemoteResponse) {
    for format in [Format::Markdown, Format::Html] {
        if let Some(text) = data.get(format.as_str()).and_then(Value::as_str) {
            response.content.insert(format, text.to_string());
        }
    }
}
