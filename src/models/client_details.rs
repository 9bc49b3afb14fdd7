// src/models/client_details.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::Parsed;

/// Identificação opaca do carrinho no checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetailsDto {
    pub cart_token: String,
}

pub type ClientDetails = ClientDetailsDto;

impl ClientDetailsDto {
    pub fn from_dto(dto: ClientDetailsDto) -> Parsed<ClientDetails> {
        dto.validate()?;
        Ok(dto)
    }

    pub fn to_dto(&self) -> ClientDetailsDto {
        self.clone()
    }
}
