//! CEP input normalization and validation.

/// Number of digits in a Brazilian postal code.
pub const CEP_LENGTH: usize = 8;

/// Removes every character that is not an ASCII digit.
///
/// # Examples
/// ```
/// use busca_cep::cep::clean_cep;
///
/// assert_eq!(clean_cep("123.45-678"), "12345678");
/// ```
pub fn clean_cep(cep: &str) -> String {
    cep.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` when the input has exactly 8 digits once normalized.
///
/// Only the digit count is checked; any 8-digit sequence is accepted.
pub fn validate_cep(cep: &str) -> bool {
    clean_cep(cep).len() == CEP_LENGTH
}
