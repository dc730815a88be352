//! World contract: what a puzzle supplies beyond the search [`Problem`].
//!
//! Worlds provide domain rules and human-readable descriptions. Worlds may
//! NOT run searches or format reports; those are runner/report concerns.
//! Contract violations are rejected when a world is constructed, never deep
//! inside a search loop.

use statespace_search::Problem;
use thiserror::Error;

/// Typed failure for world construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// A vertex name was referenced before being added.
    #[error("unknown vertex {name:?}")]
    UnknownVertex { name: String },
    /// A vertex name was added twice.
    #[error("vertex {name:?} already exists")]
    DuplicateVertex { name: String },
    /// The start or goal vertex has not been set.
    #[error("visibility graph has no {endpoint} vertex")]
    MissingEndpoint { endpoint: &'static str },
    /// A polygon needs at least one vertex.
    #[error("polygon must have at least one vertex")]
    EmptyPolygon,
    /// River-crossing populations must be non-zero.
    #[error("invalid population: {detail}")]
    InvalidPopulation { detail: String },
    /// River-crossing boat must carry at least one person.
    #[error("invalid boat: {detail}")]
    InvalidBoat { detail: String },
}

/// The contract a world must implement to be run and reported by the harness.
///
/// A world provides:
/// - A unique identifier
/// - The search problem itself (via the [`Problem`] supertrait)
/// - Stable textual descriptions of states and actions
///
/// Descriptions must be deterministic: reports are digested byte-for-byte.
pub trait World: Problem {
    /// Unique world identifier (e.g., `"river_crossing"`).
    fn world_id(&self) -> &str;

    /// Stable human-readable rendering of a state.
    fn describe_state(&self, state: &Self::State) -> String;

    /// Stable human-readable rendering of an action.
    fn describe_action(&self, action: &Self::Action) -> String;
}
