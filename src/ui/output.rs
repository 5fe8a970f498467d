//! Output and reporting functions for CEP lookups.
//!
//! This module handles all console output, including:
//! - The "searching" banner
//! - The address block of a found CEP
//! - JSON output
//! - Error lines

use crate::error::CepError;
use crate::formatter::NOT_AVAILABLE;
use crate::models::cep::FormattedCepRecord;
use owo_colors::OwoColorize;

/// Prints the banner shown before the request is sent.
///
/// # Arguments
/// * `cep` - The CEP exactly as typed by the user
pub fn print_searching(cep: &str) {
    println!("{}", format!("Buscando informações do CEP {} ...", cep).blue());
}

/// Builds the address block lines for a formatted record.
///
/// An absent `cep` is shown as `N/A`; the record itself is left untouched.
///
/// # Arguments
/// * `record` - The record returned by the formatter
///
/// # Returns
/// The CEP, street, neighborhood, city and state lines, in display order
pub fn result_lines(record: &FormattedCepRecord) -> [String; 5] {
    [
        format!("📍 CEP: {}", record.cep.as_deref().unwrap_or(NOT_AVAILABLE)),
        format!("Endereço: {}", record.logradouro),
        format!("Bairro: {}", record.bairro),
        format!("Cidade: {}", record.localidade),
        format!("Estado: {}", record.uf),
    ]
}

/// Prints the address block, with the CEP line highlighted.
///
/// # Arguments
/// * `record` - The record returned by the formatter
pub fn print_results(record: &FormattedCepRecord) {
    let [cep_line, rest @ ..] = result_lines(record);

    println!("{}", cep_line.green());
    for line in rest {
        println!("{}", line);
    }
}

/// Prints the formatted record as pretty JSON.
///
/// # Arguments
/// * `record` - The record returned by the formatter
///
/// # Returns
/// An error if the record cannot be serialized
pub fn print_json(record: &FormattedCepRecord) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

/// Prints a lookup failure on standard error.
///
/// # Arguments
/// * `error` - The failure surfaced by the fetcher
pub fn print_error(error: &CepError) {
    eprintln!("{}", format!("Error: {}", error).red());
}
