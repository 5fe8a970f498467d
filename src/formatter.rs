//! Turns a raw ViaCEP record into a display-ready one.

use crate::models::cep::{FormattedCepRecord, RawCepRecord};

/// Placeholder for address fields the service left absent or empty.
pub const NOT_AVAILABLE: &str = "N/A";

fn or_not_available(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Formats CEP data for display.
///
/// `logradouro`, `bairro`, `localidade` and `uf` fall back to `"N/A"` when
/// absent or empty. `cep` is copied as is, even when absent.
pub fn format_cep_data(record: &RawCepRecord) -> FormattedCepRecord {
    FormattedCepRecord {
        cep: record.cep.clone(),
        logradouro: or_not_available(&record.logradouro),
        bairro: or_not_available(&record.bairro),
        localidade: or_not_available(&record.localidade),
        uf: or_not_available(&record.uf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paulista() -> RawCepRecord {
        RawCepRecord {
            cep: Some("01310-100".to_string()),
            logradouro: Some("Avenida Paulista".to_string()),
            bairro: Some("Bela Vista".to_string()),
            localidade: Some("São Paulo".to_string()),
            uf: Some("SP".to_string()),
            erro: false,
        }
    }

    fn partial_expected() -> FormattedCepRecord {
        FormattedCepRecord {
            cep: Some("01310-100".to_string()),
            logradouro: "N/A".to_string(),
            bairro: "N/A".to_string(),
            localidade: "São Paulo".to_string(),
            uf: "SP".to_string(),
        }
    }

    #[test]
    fn formats_complete_record() {
        let formatted = format_cep_data(&paulista());

        assert_eq!(
            formatted,
            FormattedCepRecord {
                cep: Some("01310-100".to_string()),
                logradouro: "Avenida Paulista".to_string(),
                bairro: "Bela Vista".to_string(),
                localidade: "São Paulo".to_string(),
                uf: "SP".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_become_not_available() {
        let record = RawCepRecord {
            cep: Some("01310-100".to_string()),
            localidade: Some("São Paulo".to_string()),
            uf: Some("SP".to_string()),
            ..Default::default()
        };

        assert_eq!(format_cep_data(&record), partial_expected());
    }

    #[test]
    fn empty_fields_become_not_available() {
        let record = RawCepRecord {
            logradouro: Some(String::new()),
            bairro: Some(String::new()),
            ..paulista()
        };

        assert_eq!(format_cep_data(&record), partial_expected());
    }

    #[test]
    fn absent_cep_is_not_defaulted() {
        let record = RawCepRecord {
            cep: None,
            ..paulista()
        };

        assert_eq!(format_cep_data(&record).cep, None);
    }

    #[test]
    fn empty_cep_is_passed_through() {
        let record = RawCepRecord {
            cep: Some(String::new()),
            ..Default::default()
        };

        let formatted = format_cep_data(&record);

        assert_eq!(formatted.cep.as_deref(), Some(""));
        assert_eq!(formatted.uf, NOT_AVAILABLE);
    }

    #[test]
    fn formatting_is_idempotent() {
        let records = [
            paulista(),
            RawCepRecord::default(),
            RawCepRecord {
                bairro: Some(String::new()),
                uf: Some("RJ".to_string()),
                ..Default::default()
            },
        ];

        for record in records {
            let once = format_cep_data(&record);
            let twice = format_cep_data(&once.clone().into());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn formatted_fields_are_never_empty() {
        let formatted = format_cep_data(&RawCepRecord::default());

        for field in [
            &formatted.logradouro,
            &formatted.bairro,
            &formatted.localidade,
            &formatted.uf,
        ] {
            assert_eq!(field, NOT_AVAILABLE);
        }
    }
}
