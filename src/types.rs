//! Common data structures shared across the swap view modules
//!
//! These are the read-only inputs of the summary computation. All of
//! them are produced elsewhere (token registry, aggregator, settings
//! form) and only referenced here.

use serde::{Deserialize, Serialize};

/// Display metadata for a token, as supplied by the token registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    /// On-chain decimal places, used to cap display precision.
    pub decimals: u8,
}

impl Token {
    pub fn new(symbol: &str, decimals: u8) -> Self {
        Self {
            symbol: symbol.to_string(),
            decimals,
        }
    }
}

/// A priced route result from the external aggregation service.
///
/// Amounts are human-readable ui amounts, not raw units. The quote may
/// carry a zero or malformed input amount during a refresh; consumers
/// must degrade instead of dividing blindly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub input_amount: f64,
    pub output_amount: f64,
    /// Estimated price impact as a fraction (0.01 = 1%). Absent when
    /// the aggregator could not estimate it.
    #[serde(default)]
    pub price_impact: Option<f64>,
}

/// User-configured swap settings, owned by the settings form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapSettings {
    /// Slippage tolerance in percent (1.0 = 1%).
    pub slip_tolerance: f64,
    /// Maximum gas fee in gas units.
    pub max_gas_fee: f64,
}

/// Which way the rate line reads: forward is source -> destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayDirection {
    #[default]
    Forward,
    Inverse,
}

impl DisplayDirection {
    /// The opposite direction. Toggling twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            DisplayDirection::Forward => DisplayDirection::Inverse,
            DisplayDirection::Inverse => DisplayDirection::Forward,
        }
    }
}
