// src/usecases/vehicle.rs

use std::sync::Arc;

use crate::common::error::ZapayError;
use crate::models::plate::Plate;
use crate::models::vehicle::SimpleVehicle;
use crate::services::zapay_service::ZapayService;
use crate::usecases::authentication::TokenCell;

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleResponse {
    pub vehicle: SimpleVehicle,
}

pub struct VehicleUseCase {
    service: Arc<ZapayService>,
    tokens: TokenCell,
}

impl VehicleUseCase {
    pub fn new(service: Arc<ZapayService>, tokens: TokenCell) -> Self {
        Self { service, tokens }
    }

    pub async fn vehicle(&self, plate: &Plate) -> Result<VehicleResponse, ZapayError> {
        let token = self.tokens.get()?;
        self.service.vehicle(&token, plate).await
    }
}
