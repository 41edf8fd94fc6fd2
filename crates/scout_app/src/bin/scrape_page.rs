use std::io;
use std::process::ExitCode;

use clap::Parser;
use scout_app::{execute, init_logging, CommonArgs, Job, RunOptions};
use scout_core::Subject;
use scout_engine::Config;
use scout_logging::scout_error;

/// Scrape a page as markdown and HTML and save the result as JSON.
#[derive(Parser)]
#[command(name = "scrape_page")]
struct Cli {
    /// Subject name, used in the output filename
    #[arg(short, long, default_value = "firecrawl")]
    name: String,
    /// Page to scrape
    #[arg(short, long, default_value = "https://firecrawl.dev")]
    url: String,
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.common);

    let job = Job::page_content(Subject::new(cli.name, cli.url));
    let options = RunOptions {
        output_dir: cli.common.output_dir,
        ..RunOptions::default()
    };

    let mut stdout = io::stdout().lock();
    match execute(Config::from_env, options, &job, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            scout_error!("scrape_page failed: {err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
