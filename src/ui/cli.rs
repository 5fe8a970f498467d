//! Command-line interface module.
//!
//! This module handles CLI argument parsing and turns the parsed arguments
//! into the settings used by the fetcher.

use crate::network::{FetcherConfig, VIACEP_BASE_URL};
use clap::Parser;
use std::time::Duration;

/// CLI para buscar e exibir informações de um CEP válido.
#[derive(Parser, Debug)]
#[command(name = "busca-cep", author, version, about, long_about = None)]
pub struct Args {
    /// CEP para consulta, com ou sem formatação (ex.: 01310-100)
    #[arg(value_name = "CEP")]
    pub cep: String,

    /// Prints the formatted record as JSON instead of the text block
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds. No timeout is applied when omitted.
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Root URL of the ViaCEP-compatible service
    #[arg(long = "base-url", env = "BUSCA_CEP_BASE_URL", default_value = VIACEP_BASE_URL)]
    pub base_url: String,
}

impl Args {
    /// Builds the fetcher settings from the parsed arguments.
    ///
    /// # Returns
    /// `FetcherConfig` carrying the service root URL and, when `--timeout`
    /// was given, the request timeout as a `Duration`
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
