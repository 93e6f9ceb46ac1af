use super::ports::AmountFormatter;
use crate::error::{GatewayError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats amounts with exactly two decimal places (`3` -> `"3.00"`).
///
/// Rounds half away from zero and never emits a thousands separator. Amounts
/// too large to carry two decimal places are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoDecimalFormatter;

impl TwoDecimalFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl AmountFormatter for TwoDecimalFormatter {
    fn format(&self, amount: Decimal) -> Result<String> {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        if rounded.scale() != 2 {
            return Err(GatewayError::AmountError(format!(
                "{amount} cannot be written with two decimal places"
            )));
        }
        Ok(rounded.to_string())
    }
}
