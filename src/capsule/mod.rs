//! Turns a market payload into a capsule page: extract, format, assemble, write.

pub mod assemble;
pub mod extract;
pub mod format;
pub mod writer;

pub use assemble::{Assembled, assemble_document};
pub use extract::extract_quotes;
pub use format::format_quotes;
pub use writer::write_document;

use crate::core::{AppConfig, Clock, MarketDataProvider};
use anyhow::Result;
use tracing::debug;

/// Runs fetch, extraction, formatting and assembly in order.
pub async fn build_document(
    config: &AppConfig,
    provider: &dyn MarketDataProvider,
    clock: &dyn Clock,
) -> Result<Assembled> {
    let payload = provider.fetch().await?;
    debug!(empty = payload.is_empty(), "Fetched market payload");

    let quotes = extract_quotes(config, &payload)?;
    let lines = format_quotes(&quotes)?;
    debug!(lines = lines.len(), "Formatted quote lines");

    assemble_document(&lines, config, clock)
}
