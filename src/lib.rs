//! Strongly connected components of an encyclopedia link graph.
//!
//! Layers follow the same split as the binary:
//! - domain: graph, partitions, typed errors, ports
//! - usecase: graph building, membership index, lookup, benchmark, pipeline + events
//! - infrastructure: SCC detectors, dump adapter, schema validation, NDJSON events
//! - interface: CLI wiring and the interactive lookup loop

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
