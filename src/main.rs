//! Binary entrypoint.
//!
//! This crate is split into Clean Architecture layers:
//! - domain: pure, synchronous graph rules
//! - usecase: orchestration + progress events
//! - infrastructure: SCC detectors, serde + async IO adapters
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    wiki_scc::interface::cli::run().await
}
