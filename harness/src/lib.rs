//! Statespace Harness: concrete worlds and orchestration for the search engine.
//!
//! Worlds implement [`statespace_search::Problem`] and describe their states
//! for rendering. The harness owns running strategies and packaging the
//! solutions as canonical JSON reports; the engine owns everything about
//! how a search proceeds.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod report;
pub mod report_dir;
pub mod runner;
pub mod worlds;
