//! World implementations for the harness runner.

pub mod figure_3_31;
pub mod geometry;
pub mod river_crossing;
pub mod visibility;
