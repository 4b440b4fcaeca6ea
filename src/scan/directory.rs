//! Recursive directory scanning for RDF triple files.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use super::{MatchFiles, lines::LossyLines};
use crate::domain::{CountMode, Counters, classify};

/// Filename suffix identifying RDF triple files.
pub const TRIPLE_FILE_SUFFIX: &str = ".nt";

/// Recursively scans `dir` for triple files, accumulating line counts into
/// `counters` and extracted identifier and link lines into `matches`.
///
/// Files and directory entries that cannot be read are logged and skipped;
/// the scan continues with the next entry. Returns the number of triple
/// files scanned.
///
/// # Errors
///
/// Returns an error only when an extracted line cannot be appended to the
/// match files.
pub fn scan_directory(
    dir: &Path,
    counters: &mut Counters,
    matches: &mut MatchFiles,
    mode: CountMode,
) -> io::Result<usize> {
    let mut files_scanned = 0;

    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!("skipping unreadable entry: {error}");
                continue;
            }
        };
        if !entry.file_type().is_file()
            || !entry
                .file_name()
                .to_string_lossy()
                .ends_with(TRIPLE_FILE_SUFFIX)
        {
            continue;
        }

        files_scanned += 1;
        tracing::info!("reading from file {}", entry.path().display());

        match scan_file(entry.path(), counters, matches, mode) {
            Ok(()) => {}
            Err(ScanFileError::Read { path, source }) => {
                tracing::warn!("failed to read {}: {source}; skipping", path.display());
            }
            Err(ScanFileError::Record(error)) => return Err(error),
        }
    }

    Ok(files_scanned)
}

/// Failure modes while scanning a single triple file. Read failures are
/// recoverable at the directory level; record failures mean the match
/// files themselves are broken.
#[derive(Debug, thiserror::Error)]
enum ScanFileError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to record a matched line: {0}")]
    Record(io::Error),
}

fn scan_file(
    path: &Path,
    counters: &mut Counters,
    matches: &mut MatchFiles,
    mode: CountMode,
) -> Result<(), ScanFileError> {
    let read_error = |source| ScanFileError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut lines = LossyLines::new(BufReader::new(file));
    let mut raw_lines = 0;

    loop {
        match lines.next_line() {
            Ok(None) => break,
            Ok(Some(line)) => {
                raw_lines += 1;
                if classify::is_identifier_line(&line) {
                    matches.record_id(&line).map_err(ScanFileError::Record)?;
                }
                if classify::is_link_line(&line) {
                    matches.record_link(&line).map_err(ScanFileError::Record)?;
                }
            }
            Err(source) => return Err(read_error(source)),
        }
    }

    counters.rdf_lines += mode.file_lines(raw_lines);
    Ok(())
}
