//! Exact rational numbers and their textual forms.
//!
//! Values are [`num_rational::BigRational`], which is always kept in lowest
//! terms with a positive denominator. Parsing accepts the forms a user is
//! likely to type into a point field:
//!
//! | Form | Example | Value |
//! |------|---------|-------|
//! | Integer | `-3`, `+7` | -3, 7 |
//! | Decimal | `1.25`, `.5` | 5/4, 1/2 |
//! | Scientific | `2.5e-3` | 1/400 |
//! | Fraction | `3/4`, `-7/2` | 3/4, -7/2 |

use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{MathError, MathResult};

/// Exact rational value used for coefficients and point coordinates.
pub type Rational = BigRational;

/// Largest exponent magnitude accepted in scientific notation, e.g. `1e10000`.
pub const MAX_EXPONENT: u64 = 10_000;

/// Parses a rational number from text.
///
/// # Errors
///
/// Returns [`MathError::ParseError`] carrying the original token when the
/// text is not an integer, decimal, scientific decimal, or `p/q` fraction,
/// when a fraction has a zero denominator, or when an exponent exceeds
/// [`MAX_EXPONENT`] in magnitude.
///
/// Decimal and scientific literals are exact at any length.
///
/// # Example
///
/// ```rust
/// use lagrange_math::rational::{parse_rational, Rational};
///
/// let half = parse_rational("0.5").unwrap();
/// assert_eq!(half, Rational::new(1.into(), 2.into()));
/// assert!(parse_rational("abc").is_err());
/// ```
pub fn parse_rational(text: &str) -> MathResult<Rational> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MathError::parse_error(text));
    }

    if trimmed.contains('/') {
        return parse_fraction(trimmed).ok_or_else(|| MathError::parse_error(text));
    }

    parse_decimal(trimmed).ok_or_else(|| MathError::parse_error(text))
}

fn parse_fraction(s: &str) -> Option<Rational> {
    let (numer, denom) = s.split_once('/')?;
    // Denominator is unsigned digits only, as in `p/q`.
    if denom.is_empty() || !denom.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let numer = BigInt::from_str(numer).ok()?;
    let denom = BigInt::from_str(denom).ok()?;
    if denom.is_zero() {
        return None;
    }
    Some(Rational::new(numer, denom))
}

fn parse_decimal(s: &str) -> Option<Rational> {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], i64::from_str(&s[pos + 1..]).ok()?),
        None => (s, 0),
    };
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return None;
    }

    let (negative, digits) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut value = BigInt::from_str(&format!("{int_part}{frac_part}")).ok()?;
    if negative {
        value = -value;
    }

    // value * 10^(exponent - fractional digits)
    let shift = exponent.checked_sub(i64::try_from(frac_part.len()).ok()?)?;
    let power = num_traits::pow(BigInt::from(10u32), usize::try_from(shift.unsigned_abs()).ok()?);
    Some(if shift >= 0 {
        Rational::from_integer(value * power)
    } else {
        Rational::new(value, power)
    })
}

/// Converts a rational to the nearest `f64`.
///
/// Values too large for `f64` saturate to an infinity of the matching sign.
#[must_use]
pub fn to_f64(value: &Rational) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        if value.numer().is_zero() {
            0.0
        } else if value.numer() < &BigInt::zero() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}

/// Formats a rational as a decimal string with `precision` fractional digits.
///
/// Rounds half away from zero.
#[must_use]
pub fn to_decimal_string(value: &Rational, precision: usize) -> String {
    let scale = num_traits::pow(BigInt::from(10u32), precision);
    let scaled = value * Rational::from_integer(scale);
    let rounded = scaled.round().to_integer();

    let negative = rounded < BigInt::zero();
    let digits = if negative { -&rounded } else { rounded }.to_string();

    let body = if precision == 0 {
        digits
    } else {
        let padded = format!("{digits:0>width$}", width = precision + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - precision);
        format!("{int_part}.{frac_part}")
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Returns true when the value is an integer.
#[must_use]
pub fn is_integer(value: &Rational) -> bool {
    value.denom().is_one()
}
