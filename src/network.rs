//! Network operations for querying the ViaCEP service.
//!
//! This module owns the single outbound request of a lookup: it builds the
//! ViaCEP URL for a normalized CEP, performs the GET through a [`Transport`]
//! and classifies the outcome into a [`CepError`].

use crate::cep::{clean_cep, validate_cep};
use crate::error::{CepError, Result};
use crate::models::cep::RawCepRecord;
use std::{io, sync::Arc, time::Duration};
use thiserror::Error;
use tracing::{debug, info};
use ureq::Agent;

/// Root URL of the public ViaCEP service
pub const VIACEP_BASE_URL: &str = "https://viacep.com.br";

/// Low-level failure while talking to the service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] ureq::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something able to GET a URL and hand back the response body.
///
/// Non-2xx statuses must be reported as errors.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> std::result::Result<String, TransportError>;
}

/// Blocking HTTP transport backed by a shared `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Builds a transport. `None` keeps ureq's default of no global timeout.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(timeout)
            .build()
            .into();

        UreqTransport { agent }
    }
}

impl Transport for UreqTransport {
    fn get_json(&self, url: &str) -> std::result::Result<String, TransportError> {
        let mut response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .call()?;

        Ok(response.body_mut().read_to_string()?)
    }
}

/// Settings for [`CepFetcher::new`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        FetcherConfig {
            base_url: VIACEP_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Looks up CEPs against ViaCEP, one request per call and no retries.
#[derive(Debug, Clone)]
pub struct CepFetcher<T = UreqTransport> {
    transport: Arc<T>,
    base_url: String,
}

impl CepFetcher<UreqTransport> {
    pub fn new(config: FetcherConfig) -> Self {
        CepFetcher::with_transport(UreqTransport::new(config.timeout), config.base_url)
    }
}

impl Default for CepFetcher<UreqTransport> {
    fn default() -> Self {
        CepFetcher::new(FetcherConfig::default())
    }
}

impl<T: Transport + 'static> CepFetcher<T> {
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        CepFetcher {
            transport: Arc::new(transport),
            base_url: base_url.into(),
        }
    }

    /// URL queried for an already normalized CEP.
    pub fn lookup_url(&self, cep: &str) -> String {
        format!("{}/ws/{}/json/", self.base_url.trim_end_matches('/'), cep)
    }

    /// Fetches CEP data from ViaCEP.
    ///
    /// The input may carry separators; it is normalized before validation and
    /// before building the URL. An invalid input fails without any request.
    ///
    /// # Errors
    /// - [`CepError::InvalidInput`] if the input does not have 8 digits
    /// - [`CepError::NotFound`] if the service flags the CEP with `erro`
    /// - [`CepError::Transport`] for any request or decoding failure
    pub async fn fetch_cep_data(&self, cep: &str) -> Result<RawCepRecord> {
        let cleaned_cep = clean_cep(cep);

        if !validate_cep(&cleaned_cep) {
            return Err(CepError::InvalidInput);
        }

        let url = self.lookup_url(&cleaned_cep);
        debug!(%url, "Querying ViaCEP");

        let transport = Arc::clone(&self.transport);
        let body = smol::unblock(move || transport.get_json(&url))
            .await
            .map_err(transport_failure)?;

        let record: RawCepRecord =
            serde_json::from_str(&body).map_err(|e| transport_failure(e.into()))?;

        if record.erro {
            debug!(cep = %cleaned_cep, "ViaCEP flagged the CEP as unknown");
            return Err(CepError::NotFound);
        }

        info!(cep = %cleaned_cep, "CEP found");
        Ok(record)
    }
}

fn transport_failure(error: TransportError) -> CepError {
    debug!(%error, "ViaCEP request failed");
    CepError::Transport(error)
}

/// Fetches CEP data with the default ViaCEP settings.
///
/// # Examples
/// ```no_run
/// use busca_cep::network::fetch_cep_data;
///
/// let record = smol::block_on(fetch_cep_data("01310-100")).unwrap();
/// println!("{:?}", record.localidade);
/// ```
pub async fn fetch_cep_data(cep: &str) -> Result<RawCepRecord> {
    CepFetcher::<UreqTransport>::default()
        .fetch_cep_data(cep)
        .await
}
