// src/models/renavam.rs

use crate::common::validation::{Parsed, field_error, is_valid_renavam, single_field_failure};

/// Renavam de 11 dígitos com o verificador conferido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renavam(String);

impl Renavam {
    pub fn from_raw(maybe_renavam: &str) -> Parsed<Renavam> {
        if is_valid_renavam(maybe_renavam) {
            return Ok(Renavam(maybe_renavam.to_string()));
        }
        Err(single_field_failure(
            "renavam",
            field_error("renavam", maybe_renavam, "não é um renavam válido"),
        ))
    }

    pub fn as_raw(&self) -> &str {
        &self.0
    }

    pub fn into_raw(self) -> String {
        self.0
    }
}
