use crate::core::{PipelineError, QuoteMap};

const NAME_WIDTH: usize = 10;
const SYMBOL_COLUMN: usize = 6;

/// Renders one aligned line per quote:
///
/// ```text
/// Bitcoin   (BTC)   -  $ 65000.1234
/// Ethereum  (ETH)   -  $  3000.5000
/// ```
///
/// Widths are minimums; a long name or symbol pushes the rest of its line right.
pub fn format_quotes(quotes: &QuoteMap) -> Result<Vec<String>, PipelineError> {
    let max_price = quotes
        .iter()
        .map(|q| q.price)
        .reduce(f64::max)
        .ok_or(PipelineError::EmptyQuotes)?;
    let price_width = format!("{max_price:.4}").chars().count();

    Ok(quotes
        .iter()
        .map(|q| {
            let symbol_pad = SYMBOL_COLUMN.saturating_sub(q.symbol.chars().count());
            format!(
                "{name:<name_width$}({symbol}){pad}-  $ {price:>price_width$.4}",
                name = q.name,
                name_width = NAME_WIDTH,
                symbol = q.symbol,
                pad = " ".repeat(symbol_pad),
                price = q.price,
            )
        })
        .collect())
}
