use crate::network::TransportError;
use thiserror::Error;

/// Convenient result alias for CEP lookups.
pub type Result<T> = std::result::Result<T, CepError>;

/// Failures surfaced by a CEP lookup.
#[derive(Debug, Error)]
pub enum CepError {
    /// The input does not have exactly 8 digits once normalized.
    #[error("CEP inválido. Use 8 dígitos.")]
    InvalidInput,

    /// The service answered but flagged the CEP as unknown.
    #[error("CEP não encontrado.")]
    NotFound,

    /// The request or the decoding of its body failed. The cause is only
    /// reachable through `source()`.
    #[error("Erro ao consultar o CEP")]
    Transport(#[source] TransportError),
}
