use crate::{RecordKind, Timestamp};

/// Deterministic output name: `{subject}_{data|error}_{timestamp}.json`.
///
/// The same subject, kind and second always map to the same name.
pub fn result_filename(subject: &str, kind: RecordKind, timestamp: &Timestamp) -> String {
    format!(
        "{}_{}_{}.json",
        sanitize_subject(subject),
        kind.as_str(),
        timestamp
    )
}

/// Make a subject name safe as a filename component.
///
/// Plain identifiers such as `vercel` pass through unchanged.
pub fn sanitize_subject(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&[' ', '.'][..]);
    if cleaned.is_empty() {
        "subject".to_string()
    } else {
        cleaned.to_string()
    }
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
