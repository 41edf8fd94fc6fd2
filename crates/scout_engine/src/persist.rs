use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use scout_core::FetchResult;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("could not serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes results as pretty-printed JSON files under one directory.
///
/// An existing file with the same name is replaced; last write wins.
#[derive(Debug, Clone)]
pub struct JsonFileWriter {
    dir: PathBuf,
}

impl JsonFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Serialize `result` to `{dir}/{filename}` and return the full path.
    pub fn save(&self, filename: &str, result: &FetchResult) -> Result<PathBuf, PersistError> {
        let mut content = serde_json::to_string_pretty(result)?;
        content.push('\n');
        self.write(filename, &content)
    }

    fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
