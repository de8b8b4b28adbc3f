//! Batch export: every `*param` file in a directory becomes one
//! `<file-name>.json` in an empty output directory.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::loader::{load_params, ParamError};

/// File-name suffix selecting scoring-model files.
pub const PARAM_SUFFIX: &str = "param";

/// Failures of one batch export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("output dir is not an empty directory: {0}")]
    OutputNotEmpty(PathBuf),

    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Encode(#[from] jsonizer::EncodeError),

    #[error("json serialization: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// What one export run produced.
#[derive(Debug)]
pub struct ExportSummary {
    /// Written JSON files, in processing order.
    pub written: Vec<PathBuf>,
}

fn is_empty_dir(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => false,
    }
}

/// Exports every `*param` file under `params_dir` into `output_dir`.
///
/// `output_dir` must already exist and be empty; an export never
/// overwrites previous results. Files are processed in lexicographic
/// name order, each one independently: the first failure aborts the run.
///
/// # Errors
///
/// Directory validation, loading, encoding, and writing failures; see
/// [`ExportError`].
pub fn export_dir(params_dir: &Path, output_dir: &Path) -> Result<ExportSummary, ExportError> {
    if !params_dir.is_dir() {
        return Err(ExportError::NotADirectory(params_dir.to_owned()));
    }
    if !is_empty_dir(output_dir) {
        return Err(ExportError::OutputNotEmpty(output_dir.to_owned()));
    }

    let mut param_files: Vec<PathBuf> = fs::read_dir(params_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(PARAM_SUFFIX))
        })
        .collect();
    param_files.sort();

    let mut written = Vec::with_capacity(param_files.len());
    for params_file in &param_files {
        let scorer = load_params(params_file)?;
        let doc = jsonizer::encode(&scorer)?;

        let Some(file_name) = params_file.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let target = output_dir.join(format!("{file_name}.json"));
        info!("writing to {}", target.display());
        fs::write(&target, serde_json::to_string(&doc)?)?;
        written.push(target);
    }

    Ok(ExportSummary { written })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dir_probe() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_empty_dir(dir.path()));

        fs::write(dir.path().join("x"), b"").unwrap();
        assert!(!is_empty_dir(dir.path()));

        assert!(!is_empty_dir(&dir.path().join("missing")));
    }
}
