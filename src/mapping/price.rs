//! Price splitting for display.

use serde::{Deserialize, Serialize};

/// Decimals shown when there is no price to split.
pub const ZERO_DECIMALS: &str = "00";

/// Client-facing price: whole units plus a two-digit fractional part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    pub decimals: String,
}

impl PublicPrice {
    /// Build from the raw currency code and decimal price. A missing price yields no amount.
    pub fn from_raw(currency: Option<String>, price: Option<f64>) -> Self {
        let (amount, decimals) = match price {
            Some(price) => {
                let (amount, decimals) = format_price(price);
                (Some(amount), decimals)
            }
            None => (None, ZERO_DECIMALS.to_string()),
        };
        Self {
            currency,
            amount,
            decimals,
        }
    }
}

/// Split a price into `(floor, decimals)`.
///
/// The fraction is formatted with two digits (Rust's `{:.2}`, which rounds the exact binary
/// value half-to-even) and a leading `"0."` is stripped. A fraction that rounds up to `1.00`
/// has no such prefix and is returned unchanged.
pub fn format_price(price: f64) -> (i64, String) {
    let amount = price.floor();
    let fraction = format!("{:.2}", price - amount);
    let decimals = fraction.strip_prefix("0.").unwrap_or(&fraction).to_string();
    (amount as i64, decimals)
}
