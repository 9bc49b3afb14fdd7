// src/models/customer.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{Parsed, RE_PHONE};

/// Dados de contato enviados junto do checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    // DDD + número, 11 dígitos
    #[validate(regex(path = *RE_PHONE, message = "O telefone precisa dos 11 dígitos."))]
    pub phone: String,
}

pub type Customer = CustomerDto;

impl CustomerDto {
    pub fn from_dto(dto: CustomerDto) -> Parsed<Customer> {
        dto.validate()?;
        Ok(dto)
    }

    pub fn to_dto(&self) -> CustomerDto {
        self.clone()
    }
}
