//! Data models and serialization helpers.
//!
//! This module contains the records exchanged with the ViaCEP service and the
//! display-ready record produced by the formatter, plus the custom
//! deserializers needed to read the service payload.
pub mod cep;
pub mod serde_helpers;
