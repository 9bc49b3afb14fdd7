// src/usecases/confirmation.rs

use std::sync::Arc;

use crate::common::error::ZapayError;
use crate::models::confirmation::Confirmation;
use crate::models::debt::Debt;
use crate::models::state::State;
use crate::services::zapay_service::ZapayService;
use crate::usecases::authentication::TokenCell;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationResponse {
    pub confirmations: Vec<Confirmation>,
}

pub struct ConfirmationUseCase {
    service: Arc<ZapayService>,
    tokens: TokenCell,
}

impl ConfirmationUseCase {
    pub fn new(service: Arc<ZapayService>, tokens: TokenCell) -> Self {
        Self { service, tokens }
    }

    pub async fn confirmation(
        &self,
        protocol: &str,
        state: State,
        debts: &[Debt],
    ) -> Result<ConfirmationResponse, ZapayError> {
        let token = self.tokens.get()?;
        self.service.confirmation(&token, protocol, state, debts).await
    }
}
