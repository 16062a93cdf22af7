//! Blocking HTTP client for the EU VIES VAT number query service.

use std::time::Duration;

use crate::check::VatTransport;
use crate::countries::CountryCode;
use crate::error::CheckError;

/// The fixed VIES query endpoint. Answers rendered HTML.
pub const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/viesquer.do";

/// Sent as the user agent so service-side logs can tell this client apart.
const USER_AGENT: &str = concat!("ustid/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport talking to the real VIES service.
///
/// One synchronous POST per submission, no retries. The VIES service has
/// no authentication — it is a free public service.
#[derive(Debug, Clone)]
pub struct ViesClient {
    timeout: Duration,
}

impl ViesClient {
    /// Client with the default 30 second timeout.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Client with a caller-chosen request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ViesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VatTransport for ViesClient {
    fn submit(&self, country: CountryCode, number: &str) -> Result<String, CheckError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        let resp = client
            .post(VIES_URL)
            .form(&[
                ("Lang", "EN"),
                ("MS", country.as_str()),
                ("VAT", number),
                ("ISO", country.as_str()),
            ])
            .send()
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(CheckError::Service(format!("HTTP {status}: {body}")));
        }

        Ok(body)
    }
}
