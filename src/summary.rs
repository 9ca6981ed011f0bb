//! Quote summary computation for the swap detail panel
//!
//! Derives the six display fields shown under the swap form from a
//! quote (possibly absent), the two tokens and the user's swap
//! settings. The computation is total: any combination of absent, zero
//! or malformed numeric inputs produces a fully populated
//! `SummaryFields` with sentinel strings, never a panic or an error.

use crate::formatter::format_token_amount;
use crate::global::is_debug_summary_enabled;
use crate::logger::{log, LogTag};
use crate::types::{DisplayDirection, Quote, SwapSettings, Token};

/// Placeholder shown while no quote is available.
pub const PLACEHOLDER: &str = "-";

/// Shown when the rate cannot be computed (zero or malformed input amount).
pub const RATE_UNAVAILABLE: &str = "n/a";

/// Price impacts below this fraction are floored to a literal label so
/// a near-zero value is never shown with misleading precision.
pub const PRICE_IMPACT_FLOOR: f64 = 0.0001;
pub const PRICE_IMPACT_FLOOR_LABEL: &str = "<0.01%";

/// The six display fields, in the order the presentation layer renders
/// them: Rate, Expected Output, Minimum Received, Price Impact,
/// Slippage Tolerance, Max Gas Fee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFields {
    pub rate: String,
    pub expected_output: String,
    pub minimum_received: String,
    pub price_impact: String,
    pub slippage_tolerance: String,
    pub max_gas_fee: String,
}

impl SummaryFields {
    /// Labeled rows in the fixed display order. This ordering is a
    /// contract with the presentation layer.
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Rate", self.rate.as_str()),
            ("Expected Output", self.expected_output.as_str()),
            ("Minimum Received", self.minimum_received.as_str()),
            ("Price Impact", self.price_impact.as_str()),
            ("Slippage Tolerance", self.slippage_tolerance.as_str()),
            ("Max Gas Fee", self.max_gas_fee.as_str()),
        ]
    }
}

/// Compute the summary fields for the current quote and settings.
///
/// Pure function of its inputs; recompute whenever the quote, tokens,
/// settings or direction change.
pub fn compute_summary(
    quote: Option<&Quote>,
    from_token: &Token,
    to_token: &Token,
    settings: &SwapSettings,
    direction: DisplayDirection,
) -> SummaryFields {
    let mut rate = PLACEHOLDER.to_string();
    let mut expected_output = PLACEHOLDER.to_string();
    let mut minimum_received = PLACEHOLDER.to_string();
    let mut price_impact = PLACEHOLDER.to_string();

    if let Some(quote) = quote {
        let output = quote.output_amount;
        expected_output = format!("{} {}", format_token_amount(output, to_token), to_token.symbol);

        // Slippage applies to the raw output, not a pre-rounded display
        // value, so rounding error does not compound.
        let minimum = output * (1.0 - settings.slip_tolerance / 100.0);
        minimum_received = format!(
            "{} {}",
            format_token_amount(minimum, to_token),
            to_token.symbol
        );

        let impact = quote.price_impact.unwrap_or(0.0);
        price_impact = if impact >= PRICE_IMPACT_FLOOR {
            format!("{:.2}%", impact * 100.0)
        } else {
            PRICE_IMPACT_FLOOR_LABEL.to_string()
        };

        // The quote may carry a zero input amount mid-refresh; the rate
        // degrades to a sentinel instead of dividing by zero.
        let avg_price = quote.output_amount / quote.input_amount;
        rate = if avg_price == 0.0 || !avg_price.is_finite() {
            RATE_UNAVAILABLE.to_string()
        } else {
            match direction {
                DisplayDirection::Forward => format!(
                    "1 {} ≈ {} {}",
                    from_token.symbol,
                    format_token_amount(avg_price, to_token),
                    to_token.symbol
                ),
                DisplayDirection::Inverse => format!(
                    "1 {} ≈ {} {}",
                    to_token.symbol,
                    format_token_amount(1.0 / avg_price, from_token),
                    from_token.symbol
                ),
            }
        };

        if is_debug_summary_enabled() {
            log(
                LogTag::Summary,
                "COMPUTE",
                &format!(
                    "in={:.6} out={:.6} impact={:?} slip={}% -> rate='{}'",
                    quote.input_amount,
                    quote.output_amount,
                    quote.price_impact,
                    settings.slip_tolerance,
                    rate
                ),
            );
        }
    }

    // The echoes reflect the settings even without a quote.
    SummaryFields {
        rate,
        expected_output,
        minimum_received,
        price_impact,
        slippage_tolerance: format!("{} %", settings.slip_tolerance),
        max_gas_fee: format!("{} Gas Units", settings.max_gas_fee),
    }
}

/// Presentation state of the swap detail panel.
///
/// Owns only the display direction; the direction persists across
/// quote updates for the lifetime of the panel and flips only on
/// explicit user interaction. Toggling is a display transform and never
/// triggers a new quote.
#[derive(Debug, Default)]
pub struct SwapDetail {
    direction: DisplayDirection,
}

impl SwapDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> DisplayDirection {
        self.direction
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    pub fn summary(
        &self,
        quote: Option<&Quote>,
        from_token: &Token,
        to_token: &Token,
        settings: &SwapSettings,
    ) -> SummaryFields {
        compute_summary(quote, from_token, to_token, settings, self.direction)
    }
}
