use crate::core::{AppConfig, PipelineError, QuoteMap, RawMarketPayload};
use serde_json::Value;
use tracing::debug;

fn field<'a>(entry: &'a Value, index: usize, path: &[&str]) -> Result<&'a Value, PipelineError> {
    path.iter().try_fold(entry, |value, key| {
        value
            .get(key)
            .ok_or_else(|| PipelineError::MissingField(format!("data[{index}].{}", path.join("."))))
    })
}

/// Keeps the payload entries whose symbol is in `currency-filter`, in payload order.
///
/// A payload without a `data` array is an error, including the empty payload
/// returned by a skipped or failed fetch.
pub fn extract_quotes(
    config: &AppConfig,
    payload: &RawMarketPayload,
) -> Result<QuoteMap, PipelineError> {
    let filter = config.currency_filter()?;
    let data = payload
        .as_value()
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| PipelineError::MissingField("data".to_string()))?;

    let mut quotes = QuoteMap::new();
    for (index, entry) in data.iter().enumerate() {
        // A non-string symbol can never match the filter.
        let Some(symbol) = field(entry, index, &["symbol"])?.as_str() else {
            continue;
        };
        if !filter.iter().any(|wanted| wanted == symbol) {
            continue;
        }

        let name = field(entry, index, &["name"])?
            .as_str()
            .ok_or_else(|| PipelineError::MissingField(format!("data[{index}].name")))?;
        let price = field(entry, index, &["quote", "USD", "price"])?
            .as_f64()
            .ok_or_else(|| PipelineError::MissingField(format!("data[{index}].quote.USD.price")))?;

        quotes.insert(symbol.to_string(), name.to_string(), price);
    }

    debug!(symbols = ?quotes.symbols(), "Extracted quotes");
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_with_filter(filter: &[&str]) -> AppConfig {
        AppConfig {
            currency_filter: Some(filter.iter().map(|s| s.to_string()).collect()),
            ..AppConfig::default()
        }
    }

    fn sample_payload() -> RawMarketPayload {
        RawMarketPayload::from(json!({
            "data": [
                {"symbol": "BTC", "name": "Bitcoin", "quote": {"USD": {"price": 65000.1234}}},
                {"symbol": "ETH", "name": "Ethereum", "quote": {"USD": {"price": 3000.5}}},
                {"symbol": "DOGE", "name": "Dogecoin", "quote": {"USD": {"price": 0.1}}}
            ]
        }))
    }

    #[test]
    fn test_extract_intersection() {
        let quotes = extract_quotes(&config_with_filter(&["BTC", "ETH"]), &sample_payload()).unwrap();

        assert_eq!(quotes.len(), 2);
        let btc = quotes.get("BTC").unwrap();
        assert_eq!(btc.name, "Bitcoin");
        assert_eq!(btc.price, 65000.1234);
        let eth = quotes.get("ETH").unwrap();
        assert_eq!(eth.name, "Ethereum");
        assert_eq!(eth.price, 3000.5);
        assert!(quotes.get("DOGE").is_none());
    }

    #[test]
    fn test_extract_follows_payload_order() {
        let quotes =
            extract_quotes(&config_with_filter(&["DOGE", "SOL", "BTC"]), &sample_payload()).unwrap();

        assert_eq!(quotes.symbols(), vec!["BTC", "DOGE"]);
        assert!(quotes.get("SOL").is_none());
    }

    #[test]
    fn test_empty_filter_yields_no_quotes() {
        let quotes = extract_quotes(&config_with_filter(&[]), &sample_payload()).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let result = extract_quotes(&config_with_filter(&["BTC"]), &RawMarketPayload::empty());
        assert!(matches!(result, Err(PipelineError::MissingField(f)) if f == "data"));
    }

    #[test]
    fn test_missing_filter_is_an_error() {
        let result = extract_quotes(&AppConfig::default(), &sample_payload());
        assert!(matches!(result, Err(PipelineError::MissingConfig("currency-filter"))));
    }

    #[test]
    fn test_unfiltered_entries_need_only_a_symbol() {
        let payload = RawMarketPayload::from(json!({
            "data": [
                {"symbol": "XYZ"},
                {"symbol": "BTC", "name": "Bitcoin", "quote": {"USD": {"price": 1.5}}}
            ]
        }));

        let quotes = extract_quotes(&config_with_filter(&["BTC"]), &payload).unwrap();
        assert_eq!(quotes.symbols(), vec!["BTC"]);
    }

    #[test]
    fn test_non_string_symbol_is_skipped() {
        let payload = RawMarketPayload::from(json!({
            "data": [
                {"symbol": 42, "name": "Numeric"},
                {"symbol": null},
                {"symbol": "BTC", "name": "Bitcoin", "quote": {"USD": {"price": 1.5}}}
            ]
        }));

        let quotes = extract_quotes(&config_with_filter(&["BTC"]), &payload).unwrap();
        assert_eq!(quotes.symbols(), vec!["BTC"]);
    }

    #[test]
    fn test_entry_without_symbol_is_an_error() {
        let payload = RawMarketPayload::from(json!({
            "data": [{"name": "Bitcoin", "quote": {"USD": {"price": 1.5}}}]
        }));

        let result = extract_quotes(&config_with_filter(&["BTC"]), &payload);
        assert!(matches!(result, Err(PipelineError::MissingField(f)) if f == "data[0].symbol"));
    }

    #[test]
    fn test_matched_entry_without_price_is_an_error() {
        let payload = RawMarketPayload::from(json!({
            "data": [{"symbol": "BTC", "name": "Bitcoin", "quote": {"EUR": {"price": 1.0}}}]
        }));

        let result = extract_quotes(&config_with_filter(&["BTC"]), &payload);
        assert!(
            matches!(result, Err(PipelineError::MissingField(f)) if f == "data[0].quote.USD.price")
        );
    }
}
