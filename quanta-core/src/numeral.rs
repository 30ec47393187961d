//! Lexical split of a quantity into sign, digits and suffix text

use crate::QuantityError;

/// Sign of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// No sign or `+`
    #[default]
    Positive,
    /// `-`
    Negative,
}

/// Borrowed pieces of a quantity string
///
/// Produced by [`split`]. Digit slices contain ASCII digits only and are
/// never empty, except that `fraction` is `None` when no `.` was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral<'a> {
    /// Leading sign
    pub sign: Sign,
    /// Digits before the decimal point
    pub integer: &'a str,
    /// Digits after the decimal point
    pub fraction: Option<&'a str>,
    /// Everything after the number, possibly empty
    pub suffix: &'a str,
}

/// Split `input` into its sign, mantissa digits and suffix text
///
/// The suffix text is not validated here.
///
/// # Errors
/// `EmptyInput` for `""`; `MalformedNumeral` when the integer digits are
/// missing, a `.` is not followed by digits, or a second `.` follows the
/// fraction.
pub fn split(input: &str) -> Result<Numeral<'_>, QuantityError> {
    if input.is_empty() {
        return Err(QuantityError::EmptyInput);
    }

    let (sign, rest) = match input.as_bytes()[0] {
        b'-' => (Sign::Negative, &input[1..]),
        b'+' => (Sign::Positive, &input[1..]),
        _ => (Sign::Positive, input),
    };

    let (integer, rest) = take_digits(rest);
    if integer.is_empty() {
        return Err(QuantityError::malformed(input));
    }

    let Some(after_point) = rest.strip_prefix('.') else {
        return Ok(Numeral {
            sign,
            integer,
            fraction: None,
            suffix: rest,
        });
    };

    let (fraction, suffix) = take_digits(after_point);
    if fraction.is_empty() || suffix.starts_with('.') {
        return Err(QuantityError::malformed(input));
    }

    Ok(Numeral {
        sign,
        integer,
        fraction: Some(fraction),
        suffix,
    })
}

fn take_digits(s: &str) -> (&str, &str) {
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuantityErrorKind;

    fn kind(input: &str) -> QuantityErrorKind {
        split(input).unwrap_err().kind()
    }

    #[test]
    fn test_split_plain_integer() {
        let n = split("1024").unwrap();
        assert_eq!(n.sign, Sign::Positive);
        assert_eq!(n.integer, "1024");
        assert_eq!(n.fraction, None);
        assert_eq!(n.suffix, "");
    }

    #[test]
    fn test_split_signed_decimal_with_suffix() {
        let n = split("-1.25Gi").unwrap();
        assert_eq!(n.sign, Sign::Negative);
        assert_eq!(n.integer, "1");
        assert_eq!(n.fraction, Some("25"));
        assert_eq!(n.suffix, "Gi");

        let n = split("+7k").unwrap();
        assert_eq!(n.sign, Sign::Positive);
        assert_eq!(n.integer, "7");
        assert_eq!(n.suffix, "k");
    }

    #[test]
    fn test_split_leaves_unknown_suffix_alone() {
        let n = split("5 Mi").unwrap();
        assert_eq!(n.suffix, " Mi");
    }

    #[test]
    fn test_split_rejects_empty() {
        assert_eq!(kind(""), QuantityErrorKind::EmptyInput);
    }

    #[test]
    fn test_split_rejects_malformed() {
        for input in ["-", "+", ".", ".5", "5.", "5.M", "1.2.3", "1..2", "Mi", "+-1", " 1"] {
            assert_eq!(kind(input), QuantityErrorKind::MalformedNumeral, "{input}");
        }
    }

    #[test]
    fn test_split_non_ascii_digits_are_not_digits() {
        assert_eq!(kind("١٢"), QuantityErrorKind::MalformedNumeral);
        let n = split("1١").unwrap();
        assert_eq!(n.suffix, "١");
    }
}
