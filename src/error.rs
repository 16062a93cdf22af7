use thiserror::Error;

use crate::countries::CountryCode;

/// Everything that can go wrong while checking a VAT ID.
///
/// The first three variants are local failures raised before any network
/// access; the rest classify the remote exchange.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// No VAT number was given.
    #[error("no VAT number given")]
    MissingInput,

    /// The resolved country code is not one of the covered member states.
    /// Also raised when no country code was given at all.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),

    /// The number body does not match the country's shape.
    #[error("invalid format for country {country}: '{number}'")]
    InvalidFormat {
        /// Country whose shape was applied.
        country: CountryCode,
        /// The cleaned number body that failed.
        number: String,
    },

    /// The service confirmed the number is not registered.
    #[error("VAT number not registered")]
    NumberNotFound,

    /// The service reported an explicit error, or answered with a
    /// non-success HTTP status.
    #[error("service error: {0}")]
    Service(String),

    /// The response matched none of the expected phrases. Carries the raw
    /// response verbatim so an operator can diagnose protocol drift.
    #[error("unrecognized service response: {0}")]
    UnrecognizedResponse(String),

    /// The network exchange itself failed (connection, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(String),
}
