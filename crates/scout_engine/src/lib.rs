//! Scout engine: configuration, the remote extraction client, and the
//! fetch-and-persist pipeline.
mod client;
mod config;
mod persist;
mod pipeline;
mod request;
mod wire;

pub use client::{ClientSettings, ExtractionClient, FailureKind, FirecrawlClient, RemoteError};
pub use config::{
    Config, ConfigError, API_KEY_VAR, API_URL_VAR, DEFAULT_API_URL, OUTPUT_DIR_VAR,
};
pub use persist::{ensure_output_dir, JsonFileWriter, PersistError};
pub use pipeline::{local_clock, Clock, Pipeline, PipelineOutput};
pub use request::{ExtractionOptions, ScrapeRequest, LLM_EXTRACTION_MODE};
