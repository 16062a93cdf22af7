//! VAT ID normalization and format validation.

use crate::countries::CountryCode;
use crate::error::CheckError;

/// Turn free-form input into a validated `(country, number body)` pair
/// without any network access.
///
/// Hyphens, periods and spaces are stripped anywhere in `vat_number`. A
/// leading two-letter member state code in the number takes precedence
/// over `member_state`; pass `""` when the prefix is embedded. Prefixes
/// are matched case-sensitively, so `be...` falls through to
/// `member_state`.
///
/// # Errors
///
/// [`CheckError::MissingInput`] on an empty `vat_number`,
/// [`CheckError::UnknownCountry`] when neither the number nor
/// `member_state` yields a covered country code, and
/// [`CheckError::InvalidFormat`] when the body fails the country's shape.
///
/// # Example
///
/// ```rust
/// use ustid::{CountryCode, validate_format};
///
/// let (country, number) = validate_format("BE-0123.456.749", "").unwrap();
/// assert_eq!(country, CountryCode::BE);
/// assert_eq!(number, "0123456749");
/// ```
pub fn validate_format(
    vat_number: &str,
    member_state: &str,
) -> Result<(CountryCode, String), CheckError> {
    if vat_number.is_empty() {
        return Err(CheckError::MissingInput);
    }

    let cleaned = strip_separators(vat_number);

    let (country, body) = match split_prefix(&cleaned) {
        Some((country, body)) => (Ok(country), body),
        None => (member_state.parse::<CountryCode>(), cleaned.as_str()),
    };
    let country = country?;

    if !country.matches_body(body) {
        return Err(CheckError::InvalidFormat {
            country,
            number: body.into(),
        });
    }

    Ok((country, body.into()))
}

/// Remove hyphen, period and space characters anywhere in the input.
fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '-' | '.' | ' '))
        .collect()
}

/// Split a leading member state code off the cleaned input, if present.
fn split_prefix(cleaned: &str) -> Option<(CountryCode, &str)> {
    let prefix = cleaned.get(..2)?;
    let country = prefix.parse::<CountryCode>().ok()?;
    Some((country, &cleaned[2..]))
}
