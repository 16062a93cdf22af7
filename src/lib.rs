//! # ustid
//!
//! EU VAT ID validation: per-country format checks plus an existence
//! lookup against the EU VIES query service.
//!
//! Validation runs in two stages. The local stage strips separators,
//! resolves the member state (embedded prefix or separate argument) and
//! matches the number body against that country's shape — malformed input
//! never causes a network call. The remote stage POSTs the number to VIES
//! and classifies the answer as confirmed, not registered, or a service
//! failure.
//!
//! ## Quick Start
//!
//! ```rust
//! use ustid::{CountryCode, validate_format};
//!
//! // Format-only validation (no network)
//! let (country, number) = validate_format("BE-0123.456.749", "").unwrap();
//! assert_eq!(country, CountryCode::BE);
//! assert_eq!(number, "0123456749");
//!
//! // Shape violations are rejected locally
//! assert!(validate_format("12345678", "AT").is_err()); // missing leading U
//! ```
//!
//! The full pipeline goes through [`VatChecker`]:
//!
//! ```rust,ignore
//! use ustid::VatChecker;
//!
//! let mut checker = VatChecker::new(); // VIES-backed, requires network
//! let id = checker.check("BE0123456749", "")?;
//! assert_eq!(id.to_string(), "BE-0123456749");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `vies` (default) | VIES HTTP transport ([`ViesClient`], pulls in `reqwest`) |
//!
//! With `vies` disabled, format validation, response classification and
//! the [`VatChecker`] facade remain available; supply your own
//! [`VatTransport`].

mod check;
mod countries;
mod error;
mod format;
mod response;
#[cfg(feature = "vies")]
mod vies;

pub use check::{CheckedVatId, VatChecker, VatTransport};
pub use countries::CountryCode;
pub use error::CheckError;
pub use format::validate_format;
pub use response::interpret_response;
#[cfg(feature = "vies")]
pub use vies::{VIES_URL, ViesClient};
