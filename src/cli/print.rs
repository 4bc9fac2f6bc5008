use crate::capsule;
use crate::core::{AppConfig, Clock, MarketDataProvider, Status};
use anyhow::Result;
use std::io::Write;

/// Builds the capsule page and writes it to `out` instead of `output-location`.
pub async fn run(
    config: &AppConfig,
    provider: &dyn MarketDataProvider,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<Status> {
    let assembled = capsule::build_document(config, provider, clock).await?;
    if assembled.status == Status::Success {
        out.write_all(assembled.document.as_bytes())?;
        out.flush()?;
    }
    Ok(assembled.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RawMarketPayload, SystemClock};
    use async_trait::async_trait;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    struct StaticProvider;

    #[async_trait]
    impl MarketDataProvider for StaticProvider {
        async fn fetch(&self) -> Result<RawMarketPayload> {
            Ok(RawMarketPayload::from(json!({
                "data": [{"symbol": "ETH", "name": "Ethereum", "quote": {"USD": {"price": 3000.5}}}]
            })))
        }
    }

    #[tokio::test]
    async fn test_print_leaves_output_untouched() -> Result<()> {
        let dir = TempDir::new()?;
        let header = dir.path().join("header.gmi");
        let footer = dir.path().join("footer.gmi");
        let output = dir.path().join("prices.gmi");
        fs::write(&header, "")?;
        fs::write(&footer, "")?;
        let config = AppConfig {
            currency_filter: Some(vec!["ETH".to_string()]),
            capsule_header_location: Some(header.to_string_lossy().into_owned()),
            capsule_footer_location: Some(footer.to_string_lossy().into_owned()),
            output_location: Some(output.to_string_lossy().into_owned()),
            ..AppConfig::default()
        };

        let mut out = Vec::new();
        let status = run(&config, &StaticProvider, &SystemClock, &mut out).await?;

        assert_eq!(status, Status::Success);
        let printed = String::from_utf8(out)?;
        assert!(printed.contains("Ethereum  (ETH)   -  $ 3000.5000\n"));
        assert!(!output.exists());
        Ok(())
    }
}
