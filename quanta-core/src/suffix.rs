//! Suffix table and multipliers
//!
//! Decimal SI suffixes scale by powers of ten, binary IEC suffixes by powers
//! of two. An `e`/`E` followed by a signed integer is accepted as a decimal
//! exponent.

use std::fmt;

/// Scale factor attached to a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplier {
    /// `10^exp`
    Decimal(i32),
    /// `2^exp`
    Binary(u32),
}

impl Multiplier {
    /// Multiplier of a quantity without suffix
    pub const ONE: Self = Self::Decimal(0);
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Decimal(exp) => format!("10^{exp}"),
            Self::Binary(exp) => format!("2^{exp}"),
        };
        f.pad(&text)
    }
}

/// Recognized named suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// `n`, 10^-9
    Nano,
    /// `u`, 10^-6
    Micro,
    /// `m`, 10^-3
    Milli,
    /// `k`, 10^3
    Kilo,
    /// `M`, 10^6
    Mega,
    /// `G`, 10^9
    Giga,
    /// `T`, 10^12
    Tera,
    /// `P`, 10^15
    Peta,
    /// `E`, 10^18
    Exa,
    /// `Ki`, 2^10
    Kibi,
    /// `Mi`, 2^20
    Mebi,
    /// `Gi`, 2^30
    Gibi,
    /// `Ti`, 2^40
    Tebi,
    /// `Pi`, 2^50
    Pebi,
    /// `Ei`, 2^60
    Exbi,
}

impl Suffix {
    /// Every named suffix, decimal first
    pub const ALL: [Self; 15] = [
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
        Self::Kibi,
        Self::Mebi,
        Self::Gibi,
        Self::Tebi,
        Self::Pebi,
        Self::Exbi,
    ];

    /// Text form as written after the number
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nano => "n",
            Self::Micro => "u",
            Self::Milli => "m",
            Self::Kilo => "k",
            Self::Mega => "M",
            Self::Giga => "G",
            Self::Tera => "T",
            Self::Peta => "P",
            Self::Exa => "E",
            Self::Kibi => "Ki",
            Self::Mebi => "Mi",
            Self::Gibi => "Gi",
            Self::Tebi => "Ti",
            Self::Pebi => "Pi",
            Self::Exbi => "Ei",
        }
    }

    /// Scale factor this suffix stands for
    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Self::Nano => Multiplier::Decimal(-9),
            Self::Micro => Multiplier::Decimal(-6),
            Self::Milli => Multiplier::Decimal(-3),
            Self::Kilo => Multiplier::Decimal(3),
            Self::Mega => Multiplier::Decimal(6),
            Self::Giga => Multiplier::Decimal(9),
            Self::Tera => Multiplier::Decimal(12),
            Self::Peta => Multiplier::Decimal(15),
            Self::Exa => Multiplier::Decimal(18),
            Self::Kibi => Multiplier::Binary(10),
            Self::Mebi => Multiplier::Binary(20),
            Self::Gibi => Multiplier::Binary(30),
            Self::Tebi => Multiplier::Binary(40),
            Self::Pebi => Multiplier::Binary(50),
            Self::Exbi => Multiplier::Binary(60),
        }
    }

    /// Exact, case-sensitive lookup of a named suffix
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.symbol() == symbol)
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Resolve the text following the number to a multiplier
///
/// The empty string resolves to [`Multiplier::ONE`]. Returns `None` for
/// anything that is neither a named suffix nor a decimal exponent.
#[must_use]
pub fn resolve(text: &str) -> Option<Multiplier> {
    if text.is_empty() {
        return Some(Multiplier::ONE);
    }
    if let Some(suffix) = Suffix::from_symbol(text) {
        return Some(suffix.multiplier());
    }
    parse_exponent(text).map(Multiplier::Decimal)
}

/// `e3`, `E-2`, `e+12`; saturates at the `i32` bounds
fn parse_exponent(text: &str) -> Option<i32> {
    let rest = text.strip_prefix(['e', 'E'])?;
    let (negative, digits) = match rest.as_bytes().first()? {
        b'-' => (true, &rest[1..]),
        b'+' => (false, &rest[1..]),
        _ => (false, rest),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.bytes().fold(0_i32, |acc, b| {
        acc.saturating_mul(10).saturating_add(i32::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
