//! Exact conversion of quantity strings to integer unit counts
//!
//! `"10Mi"` is `10 * 2^20`, `"1.1M"` is `1_100_000`. Arithmetic is done on
//! integers throughout, so a value is either exact or rejected: `"1.1m"`
//! would be `0.0011` and fails with
//! [`QuantityError::NonIntegralResult`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::numeral::{self, Sign};
use crate::suffix::{self, Multiplier};
use crate::QuantityError;

/// Parse a quantity string into an exact count of base units
///
/// # Examples
/// ```
/// use quanta_core::parse_quantity;
///
/// assert_eq!(parse_quantity("10Mi").unwrap(), 10_485_760);
/// assert_eq!(parse_quantity("0.1M").unwrap(), 100_000);
/// assert!(parse_quantity("1.1m").is_err());
/// ```
///
/// # Errors
/// Returns the [`QuantityError`] variant matching the first problem found:
/// empty input, malformed number, unknown suffix, fractional result, or a
/// result outside the `i64` range.
pub fn parse_quantity(input: &str) -> Result<i64, QuantityError> {
    let parts = numeral::split(input)?;

    let multiplier =
        suffix::resolve(parts.suffix).ok_or_else(|| QuantityError::UnrecognizedSuffix {
            input: input.to_string(),
            suffix: parts.suffix.to_string(),
        })?;

    // A fraction needs a suffix to scale it
    if parts.fraction.is_some() && parts.suffix.is_empty() {
        return Err(QuantityError::malformed(input));
    }

    let mantissa = Mantissa::new(parts.integer, parts.fraction.unwrap_or(""));
    if mantissa.is_zero() {
        return Ok(0);
    }

    let magnitude = mantissa.scale(multiplier).map_err(|e| match e {
        ScaleError::NonIntegral => QuantityError::non_integral(input),
        ScaleError::Overflow => QuantityError::overflow(input),
    })?;

    apply_sign(magnitude, parts.sign).ok_or_else(|| QuantityError::overflow(input))
}

/// Unsigned decimal `digits * 10^exp10`
///
/// `digits` holds one decimal digit per byte, most significant first, with
/// no leading or trailing zeros. Zero is the empty digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Mantissa {
    digits: Vec<u8>,
    exp10: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScaleError {
    NonIntegral,
    Overflow,
}

impl Mantissa {
    fn new(integer: &str, fraction: &str) -> Self {
        let frac_zeros = trailing_zeros(fraction);
        let zeros = if frac_zeros == fraction.len() {
            frac_zeros + trailing_zeros(integer)
        } else {
            frac_zeros
        };

        let total = integer.len() + fraction.len();
        let digits: Vec<u8> = integer
            .bytes()
            .chain(fraction.bytes())
            .take(total - zeros)
            .map(|b| b - b'0')
            .skip_while(|&d| d == 0)
            .collect();

        if digits.is_empty() {
            return Self { digits, exp10: 0 };
        }

        Self {
            digits,
            exp10: len_i64(zeros) - len_i64(fraction.len()),
        }
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Scale to a whole number of units
    ///
    /// Whether the result is whole is settled before its size, so a
    /// mantissa too long for `u128` still reports a fractional result.
    fn scale(&self, multiplier: Multiplier) -> Result<u128, ScaleError> {
        match multiplier {
            Multiplier::Decimal(exp) => {
                let exp10 = self.exp10.saturating_add(i64::from(exp));
                // digits has no factor of ten left to absorb a negative power
                if exp10 < 0 {
                    return Err(ScaleError::NonIntegral);
                }
                to_u128(&self.digits)
                    .and_then(|v| v.checked_mul(pow(10, exp10).ok()?))
                    .ok_or(ScaleError::Overflow)
            }
            Multiplier::Binary(exp) => {
                let binary = pow(2, i64::from(exp))?;
                if self.exp10 >= 0 {
                    return to_u128(&self.digits)
                        .and_then(|v| v.checked_mul(pow(10, self.exp10).ok()?))
                        .and_then(|v| v.checked_mul(binary))
                        .ok_or(ScaleError::Overflow);
                }

                // digits * 2^exp / (2^q * 5^q). digits is not a multiple of
                // ten, so all of 2^q has to come from the multiplier.
                let q = u32::try_from(self.exp10.unsigned_abs())
                    .map_err(|_| ScaleError::NonIntegral)?;
                if q > exp {
                    return Err(ScaleError::NonIntegral);
                }
                let reduced = divide_by_pow5(&self.digits, q).ok_or(ScaleError::NonIntegral)?;
                to_u128(&reduced)
                    .and_then(|v| v.checked_mul(pow(2, i64::from(exp - q)).ok()?))
                    .ok_or(ScaleError::Overflow)
            }
        }
    }
}

fn pow(base: u128, exp: i64) -> Result<u128, ScaleError> {
    u32::try_from(exp)
        .ok()
        .and_then(|e| base.checked_pow(e))
        .ok_or(ScaleError::Overflow)
}

fn to_u128(digits: &[u8]) -> Option<u128> {
    digits
        .iter()
        .try_fold(0_u128, |acc, &d| acc.checked_mul(10)?.checked_add(u128::from(d)))
}

/// `digits / 5^q`, or `None` when the division leaves a remainder
fn divide_by_pow5(digits: &[u8], mut q: u32) -> Option<Vec<u8>> {
    let mut quotient = digits.to_vec();
    while q > 0 {
        let step = q.min(27);
        if div_rem(&mut quotient, 5_u128.pow(step)) != 0 {
            return None;
        }
        q -= step;
    }
    Some(quotient)
}

/// Long division of a decimal digit string in place, returning the remainder
#[allow(clippy::cast_possible_truncation)]
fn div_rem(digits: &mut Vec<u8>, divisor: u128) -> u128 {
    let mut rem = 0_u128;
    for digit in digits.iter_mut() {
        let current = rem * 10 + u128::from(*digit);
        // current < 10 * divisor
        *digit = (current / divisor) as u8;
        rem = current % divisor;
    }
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    digits.drain(..leading);
    rem
}

fn trailing_zeros(digits: &str) -> usize {
    digits.bytes().rev().take_while(|&b| b == b'0').count()
}

fn len_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

fn apply_sign(magnitude: u128, sign: Sign) -> Option<i64> {
    let magnitude = i128::try_from(magnitude).ok()?;
    let value = match sign {
        Sign::Positive => magnitude,
        Sign::Negative => -magnitude,
    };
    i64::try_from(value).ok()
}

/// A parsed quantity, in base units
///
/// Deserializes from either a quantity string (`"512Mi"`) or a plain JSON
/// integer, and serializes as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "QuantityRepr", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    /// Wrap an already known unit count
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Parse a quantity string
    ///
    /// # Errors
    /// See [`parse_quantity`].
    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        parse_quantity(input).map(Self)
    }

    /// Unit count
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, QuantityError> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Quantity {
    type Error = QuantityError;

    fn try_from(s: String) -> Result<Self, QuantityError> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for Quantity {
    type Error = QuantityError;

    fn try_from(s: &str) -> Result<Self, QuantityError> {
        Self::parse(s)
    }
}

impl From<Quantity> for i64 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuantityRepr {
    Units(i64),
    Text(String),
}

impl TryFrom<QuantityRepr> for Quantity {
    type Error = QuantityError;

    fn try_from(repr: QuantityRepr) -> Result<Self, QuantityError> {
        match repr {
            QuantityRepr::Units(units) => Ok(Self(units)),
            QuantityRepr::Text(text) => Self::parse(&text),
        }
    }
}
