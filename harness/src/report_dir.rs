//! Report directory persistence: write/read/verify search reports on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   digests.json                 — canonical JSON index: file name → digest
//!   <world>.<strategy>.json      — one canonical report per run
//! ```
//!
//! The directory path is never part of any digest.
//!
//! # Fail-closed reading
//!
//! - Missing indexed report file → error
//! - Extra unindexed file → error
//! - Report digest mismatch → error

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde_json::{json, Value};

use crate::report::{canonical_json_bytes, report_digest, ContentHash, ReportError, SearchReport};

/// File name of the digest index.
pub const DIGEST_INDEX_FILENAME: &str = "digests.json";

/// Schema tag written into the digest index.
pub const REPORT_DIR_SCHEMA_VERSION: &str = "report_dir.v1";

/// Write `reports` and their digest index into `dir`.
///
/// Creates the directory if needed. Existing report files with the same
/// names are replaced.
///
/// # Errors
///
/// - [`ReportError::InvalidWorldId`] if a world id is empty or contains
///   characters other than ASCII alphanumerics, `_` and `-`.
/// - [`ReportError::DuplicateReport`] if two reports map to one file.
/// - [`ReportError::Io`] on filesystem failure.
pub fn write_report_dir(reports: &[SearchReport], dir: &Path) -> Result<(), ReportError> {
    let mut index = BTreeMap::new();
    for report in reports {
        if !is_file_safe(&report.world_id) {
            return Err(ReportError::InvalidWorldId {
                world_id: report.world_id.clone(),
            });
        }
        let name = report.file_name();
        if index
            .insert(name.clone(), Value::from(report.digest.as_str()))
            .is_some()
        {
            return Err(ReportError::DuplicateReport { name });
        }
    }

    std::fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for report in reports {
        write_atomic(dir, &report.file_name(), &report.bytes)?;
    }

    let index = json!({
        "schema_version": REPORT_DIR_SCHEMA_VERSION,
        "reports": Value::Object(index.into_iter().collect()),
    });
    write_atomic(dir, DIGEST_INDEX_FILENAME, &canonical_json_bytes(&index))?;

    log::debug!("wrote {} reports to {}", reports.len(), dir.display());
    Ok(())
}

/// Read the digest index of `dir` and check every report against it.
///
/// Returns the verified index, file name to digest.
///
/// # Errors
///
/// Any [`ReportError`] from the fail-closed checks in the module docs, or
/// [`ReportError::MalformedIndex`] if `digests.json` has the wrong shape.
pub fn read_report_dir(dir: &Path) -> Result<BTreeMap<String, ContentHash>, ReportError> {
    let index_bytes = read_file(dir, DIGEST_INDEX_FILENAME)?;
    let index: Value = serde_json::from_slice(&index_bytes)?;

    let version = index["schema_version"].as_str().unwrap_or("");
    if version != REPORT_DIR_SCHEMA_VERSION {
        return Err(ReportError::MalformedIndex {
            detail: format!("unknown schema_version {version:?}"),
        });
    }
    let entries = index["reports"]
        .as_object()
        .ok_or_else(|| ReportError::MalformedIndex {
            detail: "\"reports\" is not an object".into(),
        })?;

    let mut verified = BTreeMap::new();
    for (name, stored) in entries {
        if name.starts_with('.') || name.contains('/') || name.contains('\\') {
            return Err(ReportError::MalformedIndex {
                detail: format!("{name:?} is not a plain file name"),
            });
        }
        let stored = stored
            .as_str()
            .and_then(ContentHash::parse)
            .ok_or_else(|| ReportError::MalformedIndex {
                detail: format!("invalid digest for {name}"),
            })?;
        let bytes = match std::fs::read(dir.join(name)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ReportError::MissingFile { name: name.clone() });
            }
            Err(source) => {
                return Err(ReportError::Io {
                    path: dir.join(name),
                    source,
                });
            }
        };
        let recomputed = report_digest(&bytes);
        if recomputed != stored {
            return Err(ReportError::DigestMismatch {
                name: name.clone(),
                stored: stored.as_str().to_owned(),
                recomputed: recomputed.as_str().to_owned(),
            });
        }
        verified.insert(name.clone(), stored);
    }

    for name in list_files(dir)? {
        if name != DIGEST_INDEX_FILENAME && !verified.contains_key(&name) {
            return Err(ReportError::ExtraFile { name });
        }
    }

    Ok(verified)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn is_file_safe(world_id: &str) -> bool {
    !world_id.is_empty()
        && world_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Write bytes via temp file + rename.
fn write_atomic(dir: &Path, name: &str, content: &[u8]) -> Result<(), ReportError> {
    let temp_path = dir.join(format!(".tmp_{name}"));
    let path = dir.join(name);
    std::fs::write(&temp_path, content).map_err(|source| ReportError::Io {
        path: temp_path.clone(),
        source,
    })?;
    std::fs::rename(&temp_path, &path).map_err(|source| ReportError::Io { path, source })
}

fn read_file(dir: &Path, name: &str) -> Result<Vec<u8>, ReportError> {
    let path = dir.join(name);
    std::fs::read(&path).map_err(|source| ReportError::Io { path, source })
}

/// Every entry in `dir`, directories included, skipping hidden temp files.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportError> {
    let io_err = |source: std::io::Error| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(".tmp_") {
            files.insert(name);
        }
    }
    Ok(files)
}
