//! Locale-aware currency rendering for price columns.
//!
//! The default format mirrors `es-CO` / `COP` as browsers render it:
//! `$`, a non-breaking space, `.` grouping, `,` decimals, two fraction digits.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency display rules for one locale/currency pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub symbol_separator: &'static str,
    pub grouping: char,
    pub decimal: char,
    pub fraction_digits: u32,
}

/// Colombian peso as rendered for the `es-CO` locale.
pub const COP_ES_CO: CurrencyFormat = CurrencyFormat {
    symbol: "$",
    symbol_separator: "\u{a0}",
    grouping: '.',
    decimal: ',',
    fraction_digits: 2,
};

impl Default for CurrencyFormat {
    fn default() -> Self {
        COP_ES_CO
    }
}

impl CurrencyFormat {
    /// Format `value` as a currency string, rounding half away from zero to
    /// `fraction_digits` like `Intl.NumberFormat` does.
    #[must_use]
    pub fn format(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().to_string();
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut out = String::new();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push_str(self.symbol_separator);
        out.push_str(&group_digits(whole, self.grouping));
        if self.fraction_digits > 0 {
            out.push(self.decimal);
            out.push_str(&format!("{fraction:0<width$}", width = self.fraction_digits as usize));
        }
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
