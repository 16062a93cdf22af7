//! Member state codes and per-country VAT number body shapes.
//!
//! The 15 member states covered by the VIES query interface, each with the
//! shape its number body must have once the two-letter prefix is removed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Two-letter code of a member state covered by the VIES check.
///
/// Greece uses its VAT prefix `EL`, not its ISO 3166 code `GR`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    /// Austria
    AT,
    /// Belgium
    BE,
    /// Germany
    DE,
    /// Denmark
    DK,
    /// Greece
    EL,
    /// Spain
    ES,
    /// Finland
    FI,
    /// France
    FR,
    /// United Kingdom
    GB,
    /// Ireland
    IE,
    /// Italy
    IT,
    /// Luxembourg
    LU,
    /// Netherlands
    NL,
    /// Portugal
    PT,
    /// Sweden
    SE,
}

impl CountryCode {
    /// All covered member states, in code order.
    pub const ALL: [Self; 15] = [
        Self::AT,
        Self::BE,
        Self::DE,
        Self::DK,
        Self::EL,
        Self::ES,
        Self::FI,
        Self::FR,
        Self::GB,
        Self::IE,
        Self::IT,
        Self::LU,
        Self::NL,
        Self::PT,
        Self::SE,
    ];

    /// The two-letter code as it appears in a VAT ID prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AT => "AT",
            Self::BE => "BE",
            Self::DE => "DE",
            Self::DK => "DK",
            Self::EL => "EL",
            Self::ES => "ES",
            Self::FI => "FI",
            Self::FR => "FR",
            Self::GB => "GB",
            Self::IE => "IE",
            Self::IT => "IT",
            Self::LU => "LU",
            Self::NL => "NL",
            Self::PT => "PT",
            Self::SE => "SE",
        }
    }

    /// Check the number body (without country prefix) against this
    /// country's shape. Full-string match: length and every position.
    ///
    /// Letter positions are uppercase-only except for Spain and France,
    /// which accept both cases.
    pub fn matches_body(self, body: &str) -> bool {
        let b = body.as_bytes();
        match self {
            Self::AT => b.len() == 9 && b[0] == b'U' && all_digits(&b[1..]),
            // Both the classic 9-digit form and the 10-digit form with the
            // leading 0/1 introduced in 2007 are in circulation.
            Self::BE => (b.len() == 9 || b.len() == 10) && all_digits(b),
            Self::DE => b.len() == 9 && all_digits(b),
            Self::DK => b.len() == 8 && all_digits(b),
            Self::EL => b.len() == 9 && all_digits(b),
            Self::ES => {
                b.len() == 9
                    && ((b[0].is_ascii_alphabetic() && all_digits(&b[1..]))
                        || (b[0].is_ascii_alphabetic()
                            && all_digits(&b[1..8])
                            && b[8].is_ascii_alphabetic())
                        || (all_digits(&b[..8]) && b[8].is_ascii_alphabetic()))
            }
            Self::FI => b.len() == 8 && all_digits(b),
            Self::FR => {
                b.len() == 11 && fr_key_char(b[0]) && fr_key_char(b[1]) && all_digits(&b[2..])
            }
            Self::GB => (b.len() == 9 || b.len() == 12) && all_digits(b),
            Self::IE => {
                b.len() == 8
                    && b[0].is_ascii_digit()
                    && b[7].is_ascii_uppercase()
                    && (all_digits(&b[1..7])
                        || (b[1].is_ascii_uppercase() && all_digits(&b[2..7])))
            }
            Self::IT => b.len() == 11 && all_digits(b),
            Self::LU => b.len() == 8 && all_digits(b),
            Self::NL => {
                b.len() == 12 && all_digits(&b[..9]) && b[9] == b'B' && all_digits(&b[10..])
            }
            Self::PT => b.len() == 9 && all_digits(b),
            Self::SE => b.len() == 12 && all_digits(b) && b.ends_with(b"01"),
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = CheckError;

    /// Case-sensitive: only the exact uppercase codes are recognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| CheckError::UnknownCountry(s.into()))
    }
}

fn all_digits(b: &[u8]) -> bool {
    b.iter().all(u8::is_ascii_digit)
}

/// French VAT keys use digits and letters except I and O (both cases).
fn fr_key_char(c: u8) -> bool {
    c.is_ascii_digit()
        || (c.is_ascii_alphabetic() && !matches!(c.to_ascii_uppercase(), b'I' | b'O'))
}
