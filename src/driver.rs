//! Batch driver: scans every source file in a directory with one scanner.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    lexer::{lexer::Scanner, stats::Statistics},
    render_error,
};

#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub directory: PathBuf,
    pub extension: String,
    /// Report and reset statistics after each file instead of once at the end.
    pub per_file: bool,
    /// Skip printing individual tokens.
    pub quiet: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            directory: PathBuf::from("cool_programs"),
            extension: String::from("cl"),
            per_file: false,
            quiet: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("cannot read directory {path:?}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Files directly inside `directory` with the given extension, sorted by path.
pub fn collect_sources(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, DriverError> {
    let read_dir_error = |source| DriverError::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let mut sources = vec![];
    for entry in fs::read_dir(directory).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            sources.push(path);
        }
    }

    sources.sort();
    Ok(sources)
}

/// Scans every matching file, writing tokens and statistics to `out` and
/// diagnostics to `err`. Returns the statistics over all files.
pub fn run<W: Write, E: Write>(
    config: &DriverConfig,
    out: &mut W,
    err: &mut E,
) -> Result<Statistics, DriverError> {
    let sources = collect_sources(&config.directory, &config.extension)?;
    info!(
        directory = %config.directory.display(),
        files = sources.len(),
        "scanning sources"
    );

    let mut scanner = Scanner::new();
    let mut total = Statistics::new();

    for path in &sources {
        let file_name = path.display().to_string();
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(error) => {
                warn!(file = %file_name, %error, "skipping unreadable file");
                writeln!(err, "Error: cannot read {}: {}", file_name, error)?;
                continue;
            }
        };

        for token in scanner.scan_named(&source, &file_name) {
            if !config.quiet {
                writeln!(out, "{}", token)?;
            }
        }

        for diagnostic in scanner.take_diagnostics() {
            write!(err, "{}", render_error(&diagnostic, &source, &file_name))?;
        }

        if config.per_file {
            let statistics = scanner.take_statistics();
            writeln!(out, "\n{}\n", statistics)?;
            total.merge(&statistics);
        }
    }

    if !config.per_file {
        total = scanner.take_statistics();
        writeln!(out, "\n{}\n", total)?;
    }

    Ok(total)
}
