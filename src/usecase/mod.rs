//! Usecase layer: application workflows + events.

pub mod analyze;
pub mod benchmark;
pub mod build_graph;
pub mod event;
pub mod membership;
pub mod query;
pub mod stats;
