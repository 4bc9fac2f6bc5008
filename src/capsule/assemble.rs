use crate::core::{AppConfig, Clock, Status};
use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M UTC";

/// An assembled page and the status the run should report for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    pub status: Status,
    pub document: String,
}

impl Assembled {
    fn failed() -> Self {
        Assembled {
            status: Status::Failure,
            document: String::new(),
        }
    }
}

/// Wraps the formatted lines in the "Prices" section between the capsule header and footer.
///
/// Missing template locations give `Status::Failure` and an empty document
/// without touching the filesystem. Unreadable template files are errors.
pub fn assemble_document(
    lines: &[String],
    config: &AppConfig,
    clock: &dyn Clock,
) -> Result<Assembled> {
    let (header_location, footer_location) = match (
        AppConfig::require(&config.capsule_header_location, "capsule-header-location"),
        AppConfig::require(&config.capsule_footer_location, "capsule-footer-location"),
    ) {
        (Ok(header), Ok(footer)) => (header, footer),
        (header, footer) => {
            for err in [header.err(), footer.err()].iter().flatten() {
                debug!(error = %err, "Cannot assemble capsule page");
            }
            return Ok(Assembled::failed());
        }
    };

    let header = fs::read_to_string(header_location)
        .with_context(|| format!("Failed to read capsule header: {header_location}"))?;
    let footer = fs::read_to_string(footer_location)
        .with_context(|| format!("Failed to read capsule footer: {footer_location}"))?;

    let updated_on = clock.now().format(TIMESTAMP_FORMAT);
    let mut document = header;
    document.push_str("## Prices\n");
    document.push_str(&format!("Prices updated on {updated_on}\n"));
    document.push_str(&format!(
        "Prices update about every {} minutes\n\n",
        config.update_interval_minutes()
    ));
    document.push_str("``` Cryptocurrency prices\n");
    document.push_str(&lines.join("\n"));
    document.push_str("\n```\n");
    document.push_str(&footer);

    Ok(Assembled {
        status: Status::Success,
        document,
    })
}
