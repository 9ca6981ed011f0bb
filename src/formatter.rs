//! Token amount formatting for display
//!
//! Stand-in for the front-end's locale formatter hook: a pure function
//! from a ui amount plus token display metadata to a string. Precision
//! follows the token's decimals, capped for readability, with trailing
//! zeros trimmed.

use crate::types::Token;

/// Hard cap on displayed fractional digits regardless of token decimals.
pub const MAX_DISPLAY_DECIMALS: u8 = 8;

/// Format a ui amount for display next to a token symbol.
///
/// Non-finite amounts render as "0"; callers that care about the
/// distinction (the rate line) guard before formatting.
pub fn format_token_amount(amount: f64, token: &Token) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    let decimals = token.decimals.min(MAX_DISPLAY_DECIMALS) as usize;
    let mut formatted = format!("{:.*}", decimals, amount);

    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usdc() -> Token {
        Token::new("USDC", 6)
    }

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_token_amount(247.5, &usdc()), "247.5");
        assert_eq!(format_token_amount(250.0, &usdc()), "250");
        assert_eq!(format_token_amount(0.25, &usdc()), "0.25");
    }

    #[test]
    fn respects_token_decimals() {
        let coarse = Token::new("XYZ", 2);
        assert_eq!(format_token_amount(1.23456, &coarse), "1.23");
        // 18-decimal tokens still cap at the display maximum
        let fine = Token::new("WETH", 18);
        assert_eq!(format_token_amount(0.123456789123, &fine), "0.12345679");
    }

    #[test]
    fn degenerate_amounts_do_not_panic() {
        assert_eq!(format_token_amount(f64::NAN, &usdc()), "0");
        assert_eq!(format_token_amount(f64::INFINITY, &usdc()), "0");
        assert_eq!(format_token_amount(0.0, &usdc()), "0");
    }
}
