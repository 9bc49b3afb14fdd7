// src/models/bill.rs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::common::validation::{Parsed, field_error, single_field_failure};

// --- Enums ---

/// Situação de uma guia de pagamento emitida para um débito.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    AwaitingPayment,
    Settled,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::AwaitingPayment => "awaiting_payment",
            BillStatus::Settled => "settled",
        }
    }

    pub fn parse(value: &str) -> Option<BillStatus> {
        match value {
            "awaiting_payment" => Some(BillStatus::AwaitingPayment),
            "settled" => Some(BillStatus::Settled),
            _ => None,
        }
    }
}

pub fn validate_bill_status(value: &str) -> Result<(), ValidationError> {
    if BillStatus::parse(value).is_some() {
        return Ok(());
    }
    Err(field_error("bill_status", value, "não é uma situação de guia conhecida"))
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BillDto {
    #[validate(length(min = 2, message = "O id precisa de ao menos 2 caracteres."))]
    pub id: String,

    #[validate(range(min = 1, message = "O valor precisa ser positivo."))]
    pub amount_in_cents: i64,

    #[validate(custom(function = validate_bill_status))]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, message = "O código de autorização precisa de ao menos 2 caracteres."))]
    pub authorization_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: String,
    pub amount_in_cents: i64,
    pub status: BillStatus,
    pub authorization_code: Option<String>,
}

impl Bill {
    pub fn from_dto(dto: BillDto) -> Parsed<Bill> {
        dto.validate()?;
        let status = BillStatus::parse(&dto.status)
            .ok_or_else(|| single_field_failure("status", field_error("bill_status", &dto.status, "não é uma situação de guia conhecida")))?;
        Ok(Bill {
            id: dto.id,
            amount_in_cents: dto.amount_in_cents,
            status,
            authorization_code: dto.authorization_code,
        })
    }

    pub fn to_dto(&self) -> BillDto {
        BillDto {
            id: self.id.clone(),
            amount_in_cents: self.amount_in_cents,
            status: self.status.as_str().to_string(),
            authorization_code: self.authorization_code.clone(),
        }
    }
}
