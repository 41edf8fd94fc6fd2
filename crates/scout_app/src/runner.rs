use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use scout_core::{
    in_field_order, object, report, CompanyProfile, Converter, Format, RecordKind, Subject,
};
use scout_engine::{
    local_clock, ClientSettings, Clock, Config, ConfigError, FirecrawlClient, JsonFileWriter,
    Pipeline, PipelineOutput, ScrapeRequest,
};
use scout_logging::scout_debug;

const BANNER_WIDTH: usize = 50;

/// A subject plus what to ask for and how to shape the answer.
#[derive(Debug, Clone)]
pub struct Job {
    pub subject: Subject,
    pub request: ScrapeRequest,
    pub convert: Converter,
}

impl Job {
    /// Structured company facts via LLM extraction.
    pub fn company_profile(subject: Subject) -> Self {
        Self {
            subject,
            request: ScrapeRequest::extract::<CompanyProfile>(),
            convert: in_field_order::<CompanyProfile>,
        }
    }

    /// Raw page content as markdown and HTML.
    pub fn page_content(subject: Subject) -> Self {
        Self {
            subject,
            request: ScrapeRequest::content(&[Format::Markdown, Format::Html]),
            convert: object,
        }
    }
}

pub struct RunOptions {
    /// Overrides the configured output directory.
    pub output_dir: Option<PathBuf>,
    pub settings: ClientSettings,
    pub clock: Clock,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            settings: ClientSettings::default(),
            clock: local_clock(),
        }
    }
}

/// Load configuration, run `job` once, and print the summary to `out`.
///
/// Configuration is resolved before any client exists, so a missing
/// credential ends the run without touching the network.
pub async fn execute<L, W>(
    load_config: L,
    options: RunOptions,
    job: &Job,
    out: &mut W,
) -> anyhow::Result<PipelineOutput>
where
    L: FnOnce() -> Result<Config, ConfigError>,
    W: Write,
{
    let mut config = load_config()?;
    if let Some(dir) = options.output_dir {
        config.output_dir = dir;
    }
    scout_debug!("running with {:?}", config);

    writeln!(out)?;
    writeln!(out, "Processing {}...", job.subject.name().to_uppercase())?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;

    let client = FirecrawlClient::new(&config, options.settings)
        .context("could not set up the extraction client")?;
    let writer = JsonFileWriter::new(config.output_dir.clone());
    let pipeline = Pipeline::new(Arc::new(client), writer, options.clock);

    let output = pipeline
        .run(&job.subject, &job.request, job.convert)
        .await
        .with_context(|| format!("could not save result under {}", config.output_dir.display()))?;

    match output.result.kind() {
        RecordKind::Data => {
            writeln!(out)?;
            writeln!(out, "All data saved to {}", output.path.display())?;
            report(&output.result, out)?;
        }
        RecordKind::Error => {
            report(&output.result, out)?;
            writeln!(out, "Error details saved to {}", output.path.display())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Processing completed!")?;
    Ok(output)
}
