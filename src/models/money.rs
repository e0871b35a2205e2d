//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (paise, cents) as `i64` to avoid
//! floating-point drift when summing. Chart code converts to `f64` at the
//! edge with [`Money::as_f64`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Symbol used by the `Display` impl
pub const DEFAULT_SYMBOL: &str = "₹";

/// A signed monetary amount stored in hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use smart_expense::models::Money;
    /// let amount = Money::from_minor(47100); // ₹471.00
    /// assert_eq!(amount.major(), 471);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units and hundredths
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Self(major * 100 + minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Get the whole units (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The amount in whole units as a float, for charting
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts: "10.50", "-10.50", "₹1,250.00", "₹-1,250.00", "$10", "-250.5".
    /// At most one sign, at least one digit, and the value must fit in `i64`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let rest = s.trim();

        // Sign may sit before or after the currency symbol, but only once
        let (mut negative, rest) = match rest.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, rest),
        };
        let rest = rest
            .strip_prefix('₹')
            .or_else(|| rest.strip_prefix('$'))
            .unwrap_or(rest)
            .trim_start();
        let rest = match rest.strip_prefix('-') {
            Some(_) if negative => return Err(invalid()),
            Some(stripped) => {
                negative = true;
                stripped
            }
            None => rest,
        };

        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad or truncate to 2 digits
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac[..2].parse().map_err(|_| invalid())?,
        };

        let minor = whole
            .checked_mul(100)
            .and_then(|m| m.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with a currency symbol and thousands separators ("₹4,250.00")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.major().unsigned_abs()),
            self.minor_part()
        )
    }

    /// Format whole units only, truncating the fraction ("₹4,250")
    pub fn format_whole(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}",
            sign,
            symbol,
            group_thousands(self.major().unsigned_abs())
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor_units(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
        assert_eq!(Money::from_major_minor(10, 50), m);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(47100).to_string(), "₹471.00");
        assert_eq!(Money::from_minor(425000).to_string(), "₹4,250.00");
        assert_eq!(Money::from_minor(-1050).to_string(), "-₹10.50");
        assert_eq!(Money::from_minor(5).to_string(), "₹0.05");
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(Money::from_minor(2_499_000).format_whole("₹"), "₹24,990");
        assert_eq!(Money::from_minor(123_456_789).format_whole("₹"), "₹1,234,567");
        assert_eq!(Money::from_minor(99).format_whole("$"), "$0");
        assert_eq!(Money::from_minor(-175_000).format_whole("₹"), "-₹1,750");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor_units(), 1500);
        assert_eq!((a - b).minor_units(), 500);
        assert_eq!((-a).minor_units(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor_units(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor_units(), -1050);
        assert_eq!(Money::parse("-250").unwrap().minor_units(), -25000);
        assert_eq!(Money::parse("-250.5").unwrap().minor_units(), -25050);
        assert_eq!(Money::parse("₹1,250.00").unwrap().minor_units(), 125000);
        assert_eq!(Money::parse("$10").unwrap().minor_units(), 1000);
        assert_eq!(Money::parse("-0.75").unwrap().minor_units(), -75);
        assert_eq!(Money::parse(" 12.345 ").unwrap().minor_units(), 1234);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12.x").is_err());
        assert!(Money::parse("ten").is_err());
    }

    #[test]
    fn test_parse_sign_placement() {
        assert_eq!(Money::parse("₹-0.50").unwrap().minor_units(), -50);
        assert_eq!(Money::parse("-₹0.50").unwrap().minor_units(), -50);
        assert_eq!(Money::parse("$-10").unwrap().minor_units(), -1000);
        assert!(Money::parse("--250").is_err());
        assert!(Money::parse("-₹-250").is_err());
        assert!(Money::parse("2-50").is_err());
        assert!(Money::parse("+250").is_err());
    }

    #[test]
    fn test_parse_requires_a_digit() {
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse("₹").is_err());
        assert!(Money::parse(",").is_err());
        assert_eq!(Money::parse(".5").unwrap().minor_units(), 50);
        assert_eq!(Money::parse("5.").unwrap().minor_units(), 500);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(Money::parse("-99999999999999999").is_err());
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("92233720368547758.08").is_err());
        assert!(Money::parse("99999999999999999999999").is_err());
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap().minor_units(),
            i64::MAX
        );
    }

    #[test]
    fn test_sum_and_float() {
        let amounts = [
            Money::from_minor(100),
            Money::from_minor(200),
            Money::from_minor(350),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.minor_units(), 650);
        assert!((total.as_f64() - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
