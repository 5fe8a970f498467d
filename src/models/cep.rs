use super::serde_helpers::truthy_flag;
use serde::{Deserialize, Serialize};

/// Payload returned by `GET /ws/{cep}/json/`.
///
/// Every address field is optional: the service omits or blanks fields it does
/// not know. A body of `{"erro": true}` signals an unknown CEP.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct RawCepRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logradouro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localidade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,

    #[serde(default, deserialize_with = "truthy_flag", skip_serializing_if = "is_false")]
    pub erro: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A record ready for display. Address fields are never empty.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FormattedCepRecord {
    pub cep: Option<String>,
    pub logradouro: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

impl From<FormattedCepRecord> for RawCepRecord {
    fn from(record: FormattedCepRecord) -> Self {
        RawCepRecord {
            cep: record.cep,
            logradouro: Some(record.logradouro),
            bairro: Some(record.bairro),
            localidade: Some(record.localidade),
            uf: Some(record.uf),
            erro: false,
        }
    }
}
