// src/models/url.rs

use crate::common::validation::{Parsed, RE_PLATE, field_error, single_field_failure};

/// Endereço registrado para receber os webhooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url(String);

impl Url {
    // TODO: trocar o padrão de placa por uma validação de URL de verdade
    // (confirmar com a Zapay qual formato o endpoint-register aceita).
    pub fn from_raw(maybe_url: &str) -> Parsed<Url> {
        let canonical = maybe_url.to_uppercase();
        if RE_PLATE.is_match(&canonical) {
            return Ok(Url(canonical));
        }
        Err(single_field_failure(
            "url",
            field_error("url", maybe_url, "não é uma url válida"),
        ))
    }

    pub fn as_raw(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_the_plate_shaped_form() {
        assert!(Url::from_raw("KYC2559").is_ok());
        assert!(Url::from_raw("https://example.com/webhook").is_err());
    }
}
