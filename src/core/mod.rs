//! Core configuration, error kinds and quote model

pub mod clock;
pub mod config;
pub mod error;
pub mod log;
pub mod quote;

// Re-export main types for cleaner imports
pub use clock::{Clock, SystemClock};
pub use config::AppConfig;
pub use error::PipelineError;
pub use quote::{MarketDataProvider, QuoteEntry, QuoteMap, RawMarketPayload, Status};
