// src/models/order.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{Parsed, field_error, single_field_failure};
use crate::models::protocol::{ProtocolStatus, validate_protocol_status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[validate(custom(function = validate_protocol_status))]
    pub status: String,
}

/// Situação corrente do pedido associado a um protocolo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub status: ProtocolStatus,
}

impl Order {
    pub fn from_dto(dto: OrderDto) -> Parsed<Order> {
        dto.validate()?;
        let status = ProtocolStatus::parse(&dto.status)
            .ok_or_else(|| single_field_failure("status", field_error("protocol_status", &dto.status, "não é uma situação de protocolo conhecida")))?;
        Ok(Order { status })
    }

    pub fn to_dto(&self) -> OrderDto {
        OrderDto { status: self.status.as_str().to_string() }
    }
}
