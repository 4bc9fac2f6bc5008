use crate::core::Status;
use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info};

/// Overwrites `output_location` with `document`.
///
/// An absent or empty location gives `Status::Failure` and no I/O.
pub fn write_document(document: &str, output_location: Option<&str>) -> Result<Status> {
    let Some(path) = output_location.filter(|p| !p.is_empty()) else {
        debug!("No output location configured");
        return Ok(Status::Failure);
    };

    fs::write(path, document).with_context(|| format!("Failed to write capsule page: {path}"))?;
    info!("Wrote capsule page to {}", path);
    Ok(Status::Success)
}
