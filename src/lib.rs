//! Brazilian postal code (CEP) lookups against the ViaCEP service.
//!
//! A lookup normalizes the input, checks it has 8 digits, issues a single GET
//! to ViaCEP and formats the answer for display:
//!
//! ```no_run
//! use busca_cep::{formatter::format_cep_data, network::CepFetcher};
//!
//! let fetcher: CepFetcher = CepFetcher::default();
//! let record = smol::block_on(fetcher.fetch_cep_data("01310-100")).unwrap();
//! let formatted = format_cep_data(&record);
//! println!("{} - {}", formatted.localidade, formatted.uf);
//! ```

pub mod cep;
pub mod error;
pub mod formatter;
pub mod models;
pub mod network;
pub mod ui;

pub use error::{CepError, Result};
pub use models::cep::{FormattedCepRecord, RawCepRecord};
