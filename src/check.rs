//! The validation pipeline: format check, remote lookup, response
//! classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::countries::CountryCode;
use crate::error::CheckError;
use crate::format::validate_format;
use crate::response::interpret_response;

/// The remote side of a check.
///
/// Implementations submit one already-format-validated number to the
/// validation service and return the raw response text. Tests substitute
/// a canned implementation to exercise the pipeline offline.
pub trait VatTransport {
    /// Submit `number` for `country` and return the response body.
    ///
    /// # Errors
    ///
    /// [`CheckError::Transport`] when the exchange itself fails,
    /// [`CheckError::Service`] on an HTTP-level failure status.
    fn submit(&self, country: CountryCode, number: &str) -> Result<String, CheckError>;
}

impl<T: VatTransport + ?Sized> VatTransport for &T {
    fn submit(&self, country: CountryCode, number: &str) -> Result<String, CheckError> {
        (**self).submit(country, number)
    }
}

/// A VAT ID confirmed as registered by the validation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedVatId {
    /// Member state the number is registered in.
    pub country: CountryCode,
    /// The cleaned number body, without country prefix.
    pub number: String,
}

impl fmt::Display for CheckedVatId {
    /// Canonical `<country>-<number>` form, e.g. `BE-0123456749`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.country, self.number)
    }
}

/// Checks VAT IDs: local format validation first, then one blocking
/// round trip to the validation service.
///
/// `check` takes `&mut self`, so shared use from several threads is a
/// compile error rather than a data race on [`last_error`]. Use one
/// checker per worker.
///
/// [`last_error`]: VatChecker::last_error
pub struct VatChecker<T: VatTransport> {
    transport: T,
    last_error: String,
}

impl<T: VatTransport> VatChecker<T> {
    /// Build a checker over a caller-supplied transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            last_error: String::new(),
        }
    }

    /// Validate `vat_number` locally and, if well-formed, against the
    /// remote service.
    ///
    /// The member state code may be embedded as a prefix of `vat_number`
    /// (which takes precedence) or passed separately as `member_state`.
    /// No network access happens when the local format check fails.
    ///
    /// Every failure is also recorded as a message retrievable via
    /// [`last_error`](Self::last_error).
    ///
    /// # Errors
    ///
    /// Any [`CheckError`]; local kinds (`MissingInput`, `UnknownCountry`,
    /// `InvalidFormat`) are raised before any network access.
    pub fn check(
        &mut self,
        vat_number: &str,
        member_state: &str,
    ) -> Result<CheckedVatId, CheckError> {
        match self.run(vat_number, member_state) {
            Ok(id) => Ok(id),
            Err(err) => {
                self.last_error = err.to_string();
                Err(err)
            }
        }
    }

    fn run(&self, vat_number: &str, member_state: &str) -> Result<CheckedVatId, CheckError> {
        let (country, number) = validate_format(vat_number, member_state)?;
        let body = self.transport.submit(country, &number)?;
        interpret_response(&body)?;
        Ok(CheckedVatId { country, number })
    }

    /// Message of the most recent failed call on this instance, `""` if
    /// none has failed yet. A later successful call does not clear it.
    ///
    /// Compatibility shim: the `Result` from [`check`](Self::check)
    /// already carries the error.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }
}

#[cfg(feature = "vies")]
impl VatChecker<crate::vies::ViesClient> {
    /// Build a checker backed by the VIES query service.
    pub fn new() -> Self {
        Self::with_transport(crate::vies::ViesClient::new())
    }
}

#[cfg(feature = "vies")]
impl Default for VatChecker<crate::vies::ViesClient> {
    fn default() -> Self {
        Self::new()
    }
}
