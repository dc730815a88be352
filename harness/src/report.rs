//! Search reports: canonical JSON per strategy run, plus content digests.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. No extraneous whitespace (compact form: `{"a":1,"b":2}`).
//! 3. Strings are JSON-escaped per RFC 8259 §7.
//! 4. Integers are written verbatim. Floats use the shortest round-trip
//!    form; `serde_json` cannot hold NaN or infinities, and the engine
//!    rejects them before they reach a report.
//! 5. `null`, `true`, `false` are written literally.
//!
//! # Digest
//!
//! `sha256(DOMAIN_SEARCH_REPORT || canonical_bytes)`, rendered as
//! `"sha256:<lowercase hex>"`.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use statespace_search::{SearchError, SearchPolicy, Strategy};
use thiserror::Error;

use crate::contract::World;
use crate::runner::{run_all, StrategyRun};

/// Domain prefix for report digests. Null-terminated.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"STATESPACE::SEARCH_REPORT::V1\0";

/// Schema tag written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// Failure producing, writing or reading reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A search failed while producing reports.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// A report or index file is not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Filesystem failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A world id cannot be used in a file name.
    #[error("world id {world_id:?} is not usable as a file name")]
    InvalidWorldId { world_id: String },
    /// Two reports would share one file.
    #[error("duplicate report {name}")]
    DuplicateReport { name: String },
    /// The digest index is structurally wrong.
    #[error("malformed digest index: {detail}")]
    MalformedIndex { detail: String },
    /// A file listed in the index is missing.
    #[error("missing report file {name}")]
    MissingFile { name: String },
    /// A file on disk is not listed in the index.
    #[error("undeclared file {name}")]
    ExtraFile { name: String },
    /// A report's bytes do not match its indexed digest.
    #[error("digest mismatch for {name}: stored={stored}, recomputed={recomputed}")]
    DigestMismatch {
        name: String,
        stored: String,
        recomputed: String,
    },
}

// ---------------------------------------------------------------------------
// Content hashes
// ---------------------------------------------------------------------------

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{hex}"),
    }
}

/// Digest of canonical report bytes.
#[must_use]
pub fn report_digest(bytes: &[u8]) -> ContentHash {
    canonical_hash(DOMAIN_SEARCH_REPORT, bytes)
}

// ---------------------------------------------------------------------------
// Canonical JSON
// ---------------------------------------------------------------------------

/// Canonical JSON bytes of `value`. See the module docs for the rules.
#[must_use]
pub fn canonical_json_bytes(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    write_value(&mut buf, value);
    buf
}

fn write_value(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => buf.extend_from_slice(b"null"),
        Value::Bool(true) => buf.extend_from_slice(b"true"),
        Value::Bool(false) => buf.extend_from_slice(b"false"),
        // Number's Display is integer-exact and shortest round-trip for floats.
        Value::Number(n) => {
            let _ = write!(buf, "{n}");
        }
        Value::String(s) => write_string(buf, s),
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item);
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_string(buf, key);
                buf.push(b':');
                write_value(buf, item);
            }
            buf.push(b'}');
        }
    }
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => {
                let mut utf8 = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }
    buf.push(b'"');
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// One strategy run on one world, rendered and digested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub world_id: String,
    pub strategy: Strategy,
    /// Canonical JSON bytes.
    pub bytes: Vec<u8>,
    /// `report_digest(bytes)`.
    pub digest: ContentHash,
}

impl SearchReport {
    /// `<world_id>.<strategy>.json`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}.json", self.world_id, self.strategy.label())
    }

    /// Parse the canonical bytes back into a JSON value.
    ///
    /// # Errors
    ///
    /// [`ReportError::Json`] if the bytes were altered into invalid JSON.
    pub fn value(&self) -> Result<Value, ReportError> {
        Ok(serde_json::from_slice(&self.bytes)?)
    }
}

/// The JSON document for one run. Field order is irrelevant; keys are
/// sorted when canonicalized.
#[must_use]
pub fn report_value<W>(world: &W, run: &StrategyRun<W::State, W::Action>) -> Value
where
    W: World + ?Sized,
{
    let outcome = &run.outcome;

    let solution = outcome.solution().map_or(Value::Null, |goal| {
        let states: Vec<String> = goal
            .states()
            .into_iter()
            .map(|s| world.describe_state(s))
            .collect();
        let actions: Vec<String> = goal
            .solution_actions()
            .into_iter()
            .map(|a| world.describe_action(a))
            .collect();
        json!({
            "cost": goal.path_cost(),
            "length": goal.depth(),
            "states": states,
            "actions": actions,
        })
    });

    let transitions = outcome.transitions.as_ref().map_or(Value::Null, |graph| {
        let expanded: Vec<String> = graph
            .expanded
            .iter()
            .map(|s| world.describe_state(s))
            .collect();
        let edges: Vec<Value> = graph
            .transitions
            .iter()
            .map(|t| {
                json!({
                    "from": world.describe_state(&t.from),
                    "action": world.describe_action(&t.action),
                    "to": world.describe_state(&t.to),
                    "path_cost": t.path_cost,
                    "outcome": t.outcome.label(),
                })
            })
            .collect();
        json!({ "expanded": expanded, "edges": edges })
    });

    let stats = &outcome.stats;
    json!({
        "schema_version": REPORT_SCHEMA_VERSION,
        "world_id": world.world_id(),
        "strategy": run.strategy.label(),
        "termination": outcome.termination.label(),
        "solution": solution,
        "stats": {
            "expansions": stats.expansions,
            "generated": stats.generated,
            "duplicates_suppressed": stats.duplicates_suppressed,
            "depth_cutoffs": stats.depth_cutoffs,
            "frontier_high_water": stats.frontier_high_water,
        },
        "transitions": transitions,
    })
}

/// Render and digest one run.
#[must_use]
pub fn build_report<W>(world: &W, run: &StrategyRun<W::State, W::Action>) -> SearchReport
where
    W: World + ?Sized,
{
    let bytes = canonical_json_bytes(&report_value(world, run));
    let digest = report_digest(&bytes);
    SearchReport {
        world_id: world.world_id().to_owned(),
        strategy: run.strategy,
        bytes,
        digest,
    }
}

/// Run all four strategies and build a report for each, in
/// [`Strategy::ALL`] order.
///
/// # Errors
///
/// [`ReportError::Search`] if any search fails.
pub fn report_all<W>(world: &W, policy: &SearchPolicy) -> Result<Vec<SearchReport>, ReportError>
where
    W: World + ?Sized,
{
    let runs = run_all(world, policy)?;
    Ok(runs.iter().map(|run| build_report(world, run)).collect())
}
