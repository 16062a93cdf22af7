//! Classification of the raw VIES query response.
//!
//! The query endpoint answers a rendered HTML page, not a structured
//! document. The three phrases of interest each appear as their own
//! rendered line once tags are broken apart, so the classifier splits
//! around tag boundaries and scans the text runs in order.

use crate::error::CheckError;

/// Line confirming the number is registered.
const PHRASE_VALID: &str = "Yes, valid VAT number";

/// Line confirming the number is not registered.
const PHRASE_INVALID: &str = "No, invalid VAT number";

/// Prefix of a service-side error line; the rest of the line is detail.
const ERROR_PREFIX: &str = "Error: ";

/// Classify a raw response body into a definitive outcome.
///
/// Scans line by line; the first recognized phrase decides the call (an
/// error line before a confirmation line fails the call).
///
/// # Errors
///
/// [`CheckError::NumberNotFound`] when the service denies the number,
/// [`CheckError::Service`] when it reports an explicit error, and
/// [`CheckError::UnrecognizedResponse`] with the response verbatim when
/// no expected phrase appears — the latter signals protocol drift the
/// caller cannot resolve.
pub fn interpret_response(raw_response: &str) -> Result<(), CheckError> {
    let normalized: String = raw_response
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    // Break after every closing '>' and before every opening '<' so each
    // rendered text run stands on its own line; tag fragments become
    // lines of their own and simply never match a phrase.
    let normalized = normalized.replace('>', ">\n").replace('<', "\n<");

    for line in normalized.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == PHRASE_INVALID {
            return Err(CheckError::NumberNotFound);
        }
        if let Some(detail) = line.strip_prefix(ERROR_PREFIX) {
            return Err(CheckError::Service(detail.into()));
        }
        if line == PHRASE_VALID {
            return Ok(());
        }
    }

    Err(CheckError::UnrecognizedResponse(raw_response.into()))
}
