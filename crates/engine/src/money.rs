use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{EngineError, ResultEngine};

/// Signed money amount represented as **integer cents**.
///
/// Every monetary value in the engine (transaction amounts, totals) goes
/// through this type to avoid floating-point drift in the sums.
///
/// The value is signed:
/// - positive = income
/// - negative = expense
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input accepts `.` or `,` as decimal separator and any
/// number of fraction digits, rounding half away from zero to cents:
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!(Money::parse_major("10").unwrap().minor(), 1000);
/// assert_eq!(Money::parse_major("10,5").unwrap().minor(), 1050);
/// assert_eq!(Money::parse_major("12.345").unwrap().minor(), 1235);
/// assert!(Money::parse_major("ten").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Number of fraction digits kept in storage.
    pub const MINOR_UNITS: u32 = 2;

    /// Largest magnitude accepted from form input, in cents.
    pub const MAX: Money = Money(1_000_000_000_000_000);

    const SCALE: i64 = 10i64.pow(Self::MINOR_UNITS);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn abs(self) -> Money {
        Money(self.0.saturating_abs())
    }

    /// Saturating addition, used by the totals.
    #[must_use]
    pub const fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    /// Splits the magnitude into whole units and cents.
    #[must_use]
    pub const fn split_abs(self) -> (u64, u64) {
        let abs = self.0.unsigned_abs();
        (abs / Self::SCALE as u64, abs % Self::SCALE as u64)
    }

    /// Parses a decimal string in major units into cents.
    ///
    /// Accepts an optional leading `+`/`-`, `.` or `,` as decimal separator,
    /// any number of fraction digits and an optional exponent (`1e3`,
    /// `-2.5E1`). Extra digits are rounded half away from zero. Rejects empty
    /// strings, anything that is not a finite decimal number and values that
    /// do not fit in `i64` cents. The [`Money::MAX`] cap is left to callers
    /// that take user input.
    pub fn parse_major(input: &str) -> ResultEngine<Money> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("not a number: {}", input.trim()));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim_start();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(pos) => {
                let exponent: i32 = rest[pos + 1..].parse().map_err(|_| invalid())?;
                (&rest[..pos], exponent)
            }
            None => (rest.as_str(), 0),
        };

        let (whole_str, frac_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(whole_str) || !is_digits(frac_str) {
            return Err(invalid());
        }

        let digits = format!("{whole_str}{frac_str}");
        if digits.bytes().all(|b| b == b'0') {
            return Ok(Money::ZERO);
        }

        // Move the decimal point by the exponent.
        let point = whole_str.len() as i64 + i64::from(exponent);
        let (whole_str, frac_str) = if point <= 0 {
            if point < -i64::from(Self::MINOR_UNITS) - 1 {
                // Every significant digit sits past the rounding position.
                return Ok(Money::ZERO);
            }
            let zeros = "0".repeat(point.unsigned_abs() as usize);
            (String::new(), format!("{zeros}{digits}"))
        } else if point as usize >= digits.len() {
            // i64 cents hold at most 19 digits, so anything wider overflows.
            if point > 40 {
                return Err(overflow());
            }
            let zeros = "0".repeat(point as usize - digits.len());
            (format!("{digits}{zeros}"), String::new())
        } else {
            let (whole, frac) = digits.split_at(point as usize);
            (whole.to_string(), frac.to_string())
        };

        let whole: i64 = if whole_str.is_empty() {
            0
        } else {
            whole_str.parse().map_err(|_| overflow())?
        };

        let frac = frac_str.as_bytes();
        let mut cents = 0i64;
        for idx in 0..Self::MINOR_UNITS as usize {
            let digit = frac.get(idx).map_or(0, |b| i64::from(b - b'0'));
            cents = cents * 10 + digit;
        }
        let round_up = frac
            .get(Self::MINOR_UNITS as usize)
            .is_some_and(|b| *b >= b'5');

        let total = whole
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(cents))
            .and_then(|v| v.checked_add(i64::from(round_up)))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -total } else { total }))
    }

    /// Converts a major-unit number (as found in stored JSON) into cents.
    ///
    /// The shortest decimal rendering of the float is rounded, so `1.005`
    /// becomes 101 cents rather than whatever `1.005 * 100.0` lands on.
    pub fn from_major(value: f64) -> ResultEngine<Money> {
        if !value.is_finite() {
            return Err(EngineError::InvalidAmount(format!("not a number: {value}")));
        }
        Self::parse_major(&value.to_string())
    }

    /// The amount in major units, for serialization.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let (units, cents) = self.split_abs();
        write!(f, "{sign}{units}.{cents:02}")
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Stored as a plain JSON number in major units: whole amounts are written as
/// integers (`1000`), the rest as floats (`-400.5`).
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % Self::SCALE == 0 {
            serializer.serialize_i64(self.0 / Self::SCALE)
        } else {
            serializer.serialize_f64(self.to_major())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_major(value).map_err(serde::de::Error::custom)
    }
}
