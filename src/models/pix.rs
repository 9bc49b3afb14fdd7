// src/models/pix.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{Parsed, RE_DOCUMENT};

/// Pagador do checkout via PIX.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PixDto {
    #[validate(regex(path = *RE_DOCUMENT, message = "O documento precisa ser um CPF ou CNPJ."))]
    pub document: String,

    #[validate(length(min = 2, message = "O nome precisa de ao menos 2 caracteres."))]
    pub name: String,
}

pub type Pix = PixDto;

impl PixDto {
    pub fn from_dto(dto: PixDto) -> Parsed<Pix> {
        dto.validate()?;
        Ok(dto)
    }

    pub fn to_dto(&self) -> PixDto {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_pattern_matches_cpf_and_cnpj() {
        for document in ["12345678901", "12345678000199"] {
            let dto = PixDto { document: document.to_string(), name: "Maria".to_string() };
            assert!(PixDto::from_dto(dto).is_ok());
        }
    }

    #[test]
    fn short_document_is_rejected() {
        let bad = PixDto { document: "1234567".to_string(), name: "Maria".to_string() };
        let failure = PixDto::from_dto(bad).unwrap_err();
        assert!(failure.field_errors().contains_key("document"));
    }
}
