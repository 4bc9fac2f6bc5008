//! Quote model shared by the fetcher and the capsule stages

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Undecoded market API response.
///
/// The only shape the extractor relies on is a top-level `data` array whose
/// entries carry `symbol`, `name` and `quote.USD.price`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMarketPayload(pub Value);

impl RawMarketPayload {
    /// The payload produced when the fetch is skipped or the transport fails.
    pub fn empty() -> Self {
        RawMarketPayload(Value::Object(serde_json::Map::new()))
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RawMarketPayload {
    fn from(value: Value) -> Self {
        RawMarketPayload(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteEntry {
    pub symbol: String,
    pub name: String,
    pub price: f64,
}

/// Quotes keyed by ticker symbol, kept in the order symbols first appear in
/// the payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteMap {
    entries: Vec<QuoteEntry>,
}

impl QuoteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a quote. A symbol seen before keeps its position and takes the new value.
    pub fn insert(&mut self, symbol: String, name: String, price: f64) {
        match self.entries.iter_mut().find(|e| e.symbol == symbol) {
            Some(existing) => {
                existing.name = name;
                existing.price = price;
            }
            None => self.entries.push(QuoteEntry {
                symbol,
                name,
                price,
            }),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&QuoteEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuoteEntry> {
        self.entries.iter()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.symbol.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome code of the assembler and the writer, also used as the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch(&self) -> Result<RawMarketPayload>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut quotes = QuoteMap::new();
        quotes.insert("BTC".to_string(), "Bitcoin".to_string(), 1.0);
        quotes.insert("ETH".to_string(), "Ethereum".to_string(), 2.0);
        quotes.insert("BTC".to_string(), "Bitcoin Core".to_string(), 3.0);

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes.symbols(), vec!["BTC", "ETH"]);
        let btc = quotes.get("BTC").unwrap();
        assert_eq!(btc.name, "Bitcoin Core");
        assert_eq!(btc.price, 3.0);
    }

    #[test]
    fn test_empty_payload() {
        assert!(RawMarketPayload::empty().is_empty());
        assert!(!RawMarketPayload::from(serde_json::json!({"data": []})).is_empty());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Success.code(), 0);
        assert_eq!(Status::Failure.code(), 1);
    }
}
