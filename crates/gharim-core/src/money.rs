//! # Money Module
//!
//! Provides the `Money` type for prices and totals, and the currency
//! formatter used everywhere an amount is shown to a shopper or sent to the
//! store operator.
//!
//! ## Why Integer Dinars?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Iraqi dinar prices have no fractional part in practice.               │
//! │                                                                         │
//! │  Catalog price 5000 ──► Money(5000) ──► "‏٥٬٠٠٠ د.ع.‏"                  │
//! │                                                                         │
//! │  All cart math is integer math: unit price × quantity, then a sum.     │
//! │  No floats means the total in the WhatsApp message always equals the  │
//! │  sum of the line subtotals printed above it.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gharim_core::money::{format_currency, CurrencyFormat, Money};
//!
//! let price = Money::from_dinars(5000);
//! let line = price * 2;
//! assert_eq!(line.dinars(), 10_000);
//!
//! let latin = CurrencyFormat::iraqi_dinar_latin();
//! assert_eq!(latin.format(line), "IQD\u{a0}10,000");
//!
//! // The store locale (ar-IQ) uses Arabic-Indic digits.
//! assert!(format_currency(line).contains("١٠٬٠٠٠"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole Iraqi dinars.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem.unit_price ──► CartItem.line_total
///                                                 │
///                                                 ▼
///                          Cart.cart_total ──► Order message "Total:"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole dinars.
    #[inline]
    pub const fn from_dinars(dinars: i64) -> Self {
        Money(dinars)
    }

    /// Returns the amount in whole dinars.
    #[inline]
    pub const fn dinars(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use gharim_core::money::Money;
    ///
    /// let unit_price = Money::from_dinars(2500);
    /// assert_eq!(unit_price.multiply_quantity(3).dinars(), 7500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

/// Display uses the Latin preset; shopper-facing text goes through
/// [`format_currency`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CurrencyFormat::iraqi_dinar_latin().format(*self))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity. Saturates like [`Money::multiply_quantity`].
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Currency Formatting
// =============================================================================

/// Digit set used when rendering an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Numerals {
    /// 0123456789
    Latin,
    /// ٠١٢٣٤٥٦٧٨٩
    ArabicIndic,
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

const NO_BREAK_SPACE: char = '\u{a0}';

const RIGHT_TO_LEFT_MARK: char = '\u{200f}';

/// Locale rules for rendering a [`Money`] amount with zero fraction digits.
///
/// ## Presets
/// ```text
/// iraqi_dinar_arabic()  10000 ──► "‏١٠٬٠٠٠ د.ع.‏"   (ar-IQ, store default)
/// iraqi_dinar_latin()   10000 ──► "IQD 10,000"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    pub numerals: Numerals,
    pub grouping_separator: char,
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    /// Wrap the result in right-to-left marks so it stays intact inside
    /// Arabic text.
    pub right_to_left: bool,
}

impl CurrencyFormat {
    /// The `ar-IQ` rendering of Iraqi dinars.
    pub fn iraqi_dinar_arabic() -> Self {
        CurrencyFormat {
            numerals: Numerals::ArabicIndic,
            grouping_separator: '٬',
            symbol: "د.ع.".to_string(),
            symbol_position: SymbolPosition::Suffix,
            right_to_left: true,
        }
    }

    /// A Latin-digit rendering of Iraqi dinars.
    pub fn iraqi_dinar_latin() -> Self {
        CurrencyFormat {
            numerals: Numerals::Latin,
            grouping_separator: ',',
            symbol: "IQD".to_string(),
            symbol_position: SymbolPosition::Prefix,
            right_to_left: false,
        }
    }

    /// Formats an amount. Pure: identical input always gives identical output.
    pub fn format(&self, amount: Money) -> String {
        let grouped = group_digits(
            &amount.dinars().unsigned_abs().to_string(),
            self.grouping_separator,
        );

        let digits: String = match self.numerals {
            Numerals::Latin => grouped,
            Numerals::ArabicIndic => grouped
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .map_or(c, |d| ARABIC_INDIC_DIGITS[d as usize])
                })
                .collect(),
        };

        let number = if amount.is_negative() {
            format!("-{}", digits)
        } else {
            digits
        };

        let body = match self.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{}", self.symbol, NO_BREAK_SPACE, number),
            SymbolPosition::Suffix => format!("{}{}{}", number, NO_BREAK_SPACE, self.symbol),
        };

        if self.right_to_left {
            format!("{}{}{}", RIGHT_TO_LEFT_MARK, body, RIGHT_TO_LEFT_MARK)
        } else {
            body
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::iraqi_dinar_arabic()
    }
}

/// Formats an amount in the store locale (`ar-IQ`, Iraqi dinars, no
/// fraction digits).
///
/// This is the single formatter used by the order message, so the operator
/// always sees prices the same way regardless of the shopper's language.
pub fn format_currency(amount: Money) -> String {
    CurrencyFormat::iraqi_dinar_arabic().format(amount)
}

/// Inserts `separator` between groups of three digits, counted from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len_utf8());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dinars() {
        let money = Money::from_dinars(5000);
        assert_eq!(money.dinars(), 5000);
        assert!(!money.is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_dinars(1000);
        let b = Money::from_dinars(500);

        assert_eq!((a + b).dinars(), 1500);
        assert_eq!((a - b).dinars(), 500);
        assert_eq!((a * 3).dinars(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.dinars(), 1500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1000, 2500, 500]
            .into_iter()
            .map(Money::from_dinars)
            .sum();
        assert_eq!(total.dinars(), 4000);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_dinars(i64::MAX / 2);

        assert_eq!(Money::from_dinars(5000).multiply_quantity(2_000_000_000_000_000_000).dinars(), i64::MAX);
        assert_eq!((huge * 3).dinars(), i64::MAX);
        assert_eq!((huge + huge + huge).dinars(), i64::MAX);

        let total: Money = [huge, huge, huge].into_iter().sum();
        assert_eq!(total.dinars(), i64::MAX);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", ','), "0");
        assert_eq!(group_digits("100", ','), "100");
        assert_eq!(group_digits("1000", ','), "1,000");
        assert_eq!(group_digits("10000", ','), "10,000");
        assert_eq!(group_digits("1000000", ','), "1,000,000");
    }

    #[test]
    fn test_format_currency_arabic() {
        assert_eq!(
            format_currency(Money::from_dinars(10_000)),
            "\u{200f}١٠٬٠٠٠\u{a0}د.ع.\u{200f}"
        );
        assert_eq!(
            format_currency(Money::from_dinars(0)),
            "\u{200f}٠\u{a0}د.ع.\u{200f}"
        );
        assert_eq!(
            format_currency(Money::from_dinars(1_250_000)),
            "\u{200f}١٬٢٥٠٬٠٠٠\u{a0}د.ع.\u{200f}"
        );
    }

    #[test]
    fn test_format_currency_is_deterministic() {
        let amount = Money::from_dinars(7_500);
        assert_eq!(format_currency(amount), format_currency(amount));
    }

    #[test]
    fn test_format_latin() {
        let latin = CurrencyFormat::iraqi_dinar_latin();
        assert_eq!(latin.format(Money::from_dinars(10_000)), "IQD\u{a0}10,000");
        assert_eq!(latin.format(Money::from_dinars(-250)), "IQD\u{a0}-250");
        assert_eq!(Money::from_dinars(999).to_string(), "IQD\u{a0}999");
    }
}
