// src/usecases/debts.rs

use std::sync::Arc;

use crate::common::error::ZapayError;
use crate::models::debt::Debt;
use crate::models::plate::Plate;
use crate::models::renavam::Renavam;
use crate::models::state::State;
use crate::models::vehicle::CompleteVehicle;
use crate::services::zapay_service::ZapayService;
use crate::usecases::authentication::TokenCell;

#[derive(Debug, Clone, PartialEq)]
pub struct DebtsResponse {
    pub protocol: String,
    pub debts: Vec<Debt>,
    pub vehicle: CompleteVehicle,
}

/// Resposta da consulta assíncrona: o resultado chega depois via webhook.
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncDebtsResponse {
    pub protocol: String,
    pub status: String,
}

pub struct DebtsUseCase {
    service: Arc<ZapayService>,
    tokens: TokenCell,
}

impl DebtsUseCase {
    pub fn new(service: Arc<ZapayService>, tokens: TokenCell) -> Self {
        Self { service, tokens }
    }

    pub async fn debts(
        &self,
        state: State,
        plate: &Plate,
        renavam: &Renavam,
    ) -> Result<DebtsResponse, ZapayError> {
        let token = self.tokens.get()?;
        self.service.debts(&token, state, plate, renavam).await
    }

    pub async fn async_debts(
        &self,
        state: State,
        plate: &Plate,
        renavam: &Renavam,
    ) -> Result<AsyncDebtsResponse, ZapayError> {
        let token = self.tokens.get()?;
        self.service.async_debts(&token, state, plate, renavam).await
    }
}
