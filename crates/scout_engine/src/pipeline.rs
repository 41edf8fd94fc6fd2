use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDateTime;
use scout_core::{normalize, Converter, FetchResult, RecordKind, Subject, Timestamp};
use scout_logging::{scout_info, scout_warn};

use crate::{ExtractionClient, JsonFileWriter, PersistError, ScrapeRequest};

/// Source of capture times.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Wall-clock local time, matching how output files are named for a person
/// reading the directory.
pub fn local_clock() -> Clock {
    Arc::new(|| chrono::Local::now().naive_local())
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub path: PathBuf,
    pub result: FetchResult,
}

/// One remote call, one normalized record, one file.
pub struct Pipeline {
    client: Arc<dyn ExtractionClient>,
    writer: JsonFileWriter,
    clock: Clock,
}

impl Pipeline {
    pub fn new(client: Arc<dyn ExtractionClient>, writer: JsonFileWriter, clock: Clock) -> Self {
        Self {
            client,
            writer,
            clock,
        }
    }

    /// Fetch `subject`, write its record, and return where it went.
    ///
    /// Remote failures are recorded in an error file and do not fail the
    /// run; only persistence failures are returned as errors.
    pub async fn run(
        &self,
        subject: &Subject,
        request: &ScrapeRequest,
        convert: Converter,
    ) -> Result<PipelineOutput, PersistError> {
        let outcome = self.client.fetch(subject.url(), request).await;
        let timestamp = Timestamp::from_datetime((self.clock)());

        if let Err(err) = &outcome {
            scout_warn!("fetch of {} failed ({}): {}", subject.url(), err.kind, err);
        }
        let result = normalize(subject, timestamp, outcome, convert);

        let filename = result.filename();
        let path = self.writer.save(&filename, &result)?;
        match result.kind() {
            RecordKind::Data => scout_info!("saved {} data to {}", subject.name(), path.display()),
            RecordKind::Error => {
                scout_info!("saved {} error details to {}", subject.name(), path.display())
            }
        }
        Ok(PipelineOutput { path, result })
    }
}
