// src/models/protocol.rs

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::common::validation::field_error;

// --- Enums ---

/// Situação de um protocolo ao longo do fluxo consulta -> checkout -> pagamento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtocolStatus {
    Search,
    Simulation,
    CheckoutSuccess,
    VehicleNotFound,
    VehicleWithoutDebts,
    ServiceUnavailable,
    CheckoutFail,
    PaymentInitiated,
    BarcodeEmitted,
}

impl ProtocolStatus {
    pub const ALL: [ProtocolStatus; 9] = [
        ProtocolStatus::Search,
        ProtocolStatus::Simulation,
        ProtocolStatus::CheckoutSuccess,
        ProtocolStatus::VehicleNotFound,
        ProtocolStatus::VehicleWithoutDebts,
        ProtocolStatus::ServiceUnavailable,
        ProtocolStatus::CheckoutFail,
        ProtocolStatus::PaymentInitiated,
        ProtocolStatus::BarcodeEmitted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolStatus::Search => "SEARCH",
            ProtocolStatus::Simulation => "SIMULATION",
            ProtocolStatus::CheckoutSuccess => "CHECKOUT_SUCCESS",
            ProtocolStatus::VehicleNotFound => "VEHICLE_NOT_FOUND",
            ProtocolStatus::VehicleWithoutDebts => "VEHICLE_WITHOUT_DEBTS",
            ProtocolStatus::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ProtocolStatus::CheckoutFail => "CHECKOUT_FAIL",
            ProtocolStatus::PaymentInitiated => "PAYMENT_INITIATED",
            ProtocolStatus::BarcodeEmitted => "BARCODE_EMITTED",
        }
    }

    pub fn parse(value: &str) -> Option<ProtocolStatus> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

pub fn validate_protocol_status(value: &str) -> Result<(), ValidationError> {
    if ProtocolStatus::parse(value).is_some() {
        return Ok(());
    }
    Err(field_error("protocol_status", value, "não é uma situação de protocolo conhecida"))
}
