//! Scout app: shared entry-point logic for the `extract_company` and
//! `scrape_page` binaries.
mod cli;
mod runner;

pub use cli::{init_logging, CommonArgs};
pub use runner::{execute, Job, RunOptions};
