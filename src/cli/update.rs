use crate::capsule;
use crate::core::{AppConfig, Clock, MarketDataProvider, Status};
use anyhow::Result;
use tracing::warn;

/// Builds the capsule page and writes it to `output-location`.
///
/// A page that could not be assembled is not written.
pub async fn run(
    config: &AppConfig,
    provider: &dyn MarketDataProvider,
    clock: &dyn Clock,
) -> Result<Status> {
    let assembled = capsule::build_document(config, provider, clock).await?;
    if assembled.status == Status::Failure {
        warn!("Capsule page could not be assembled, check the template locations");
        return Ok(Status::Failure);
    }

    let status = capsule::write_document(&assembled.document, config.output_location.as_deref())?;
    if status == Status::Failure {
        warn!("No output location configured, capsule page not written");
    }
    Ok(status)
}
