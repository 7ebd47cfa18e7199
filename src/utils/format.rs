use rust_decimal::{Decimal, RoundingStrategy};

/// Renders an amount as `<symbol><amount>` with exactly two decimals.
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{}{}", symbol, rounded)
}
