use scout_core::{ExtractionSchema, ExtractionTarget, Format};

/// Mode flag asking the service for LLM-backed field extraction.
pub const LLM_EXTRACTION_MODE: &str = "llm-extraction";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOptions {
    pub schema: ExtractionSchema,
    pub mode: &'static str,
    /// Restrict extraction to the page's main content.
    pub only_main_content: bool,
}

impl ExtractionOptions {
    pub fn llm(schema: ExtractionSchema) -> Self {
        Self {
            schema,
            mode: LLM_EXTRACTION_MODE,
            only_main_content: true,
        }
    }
}

/// What to ask the remote service for, independent of the target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub formats: Vec<Format>,
    pub extraction: Option<ExtractionOptions>,
}

impl ScrapeRequest {
    /// Raw content in the given formats.
    pub fn content(formats: &[Format]) -> Self {
        Self {
            formats: formats.to_vec(),
            extraction: None,
        }
    }

    /// Structured extraction of `T`'s fields.
    pub fn extract<T: ExtractionTarget>() -> Self {
        Self {
            formats: vec![Format::Json],
            extraction: Some(ExtractionOptions::llm(T::schema())),
        }
    }
}
