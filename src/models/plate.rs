// src/models/plate.rs

use crate::common::validation::{Parsed, RE_PLATE, field_error, single_field_failure};

/// Placa de veículo já validada e normalizada em maiúsculas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plate(String);

impl Plate {
    pub fn from_raw(maybe_plate: &str) -> Parsed<Plate> {
        let canonical = maybe_plate.to_uppercase();
        if RE_PLATE.is_match(&canonical) {
            return Ok(Plate(canonical));
        }
        Err(single_field_failure(
            "plate",
            field_error("plate", maybe_plate, "não é uma placa válida"),
        ))
    }

    pub fn as_raw(&self) -> &str {
        &self.0
    }

    pub fn into_raw(self) -> String {
        self.0
    }
}
