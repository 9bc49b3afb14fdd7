// src/models/billing_address.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::Parsed;

/// Endereço de cobrança do cartão. Todos os campos são opcionais; o CEP,
/// quando presente, precisa dos 8 dígitos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddressDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 8, message = "O CEP precisa de ao menos 8 caracteres."))]
    pub zip_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// O endereço validado tem exatamente a forma do DTO.
pub type BillingAddress = BillingAddressDto;

impl BillingAddressDto {
    pub fn from_dto(dto: BillingAddressDto) -> Parsed<BillingAddress> {
        dto.validate()?;
        Ok(dto)
    }

    pub fn to_dto(&self) -> BillingAddressDto {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address_is_valid() {
        let empty = BillingAddressDto {
            zip_code: None,
            address: None,
            neighborhood: None,
            city: None,
            number: None,
        };
        assert!(BillingAddressDto::from_dto(empty.clone()).is_ok());
        assert_eq!(serde_json::to_value(&empty).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn short_zip_code_is_rejected() {
        let bad = BillingAddressDto {
            zip_code: Some("3040".to_string()),
            address: None,
            neighborhood: None,
            city: None,
            number: None,
        };
        let failure = BillingAddressDto::from_dto(bad).unwrap_err();
        assert!(failure.field_errors().contains_key("zip_code"));
    }
}
