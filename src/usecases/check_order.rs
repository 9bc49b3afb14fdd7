// src/usecases/check_order.rs

use std::sync::Arc;

use crate::common::error::ZapayError;
use crate::models::bill::Bill;
use crate::models::order::Order;
use crate::services::zapay_service::ZapayService;
use crate::usecases::authentication::TokenCell;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckOrderResponse {
    pub order: Order,
    pub bills: Vec<Bill>,
}

pub struct CheckOrderUseCase {
    service: Arc<ZapayService>,
    tokens: TokenCell,
}

impl CheckOrderUseCase {
    pub fn new(service: Arc<ZapayService>, tokens: TokenCell) -> Self {
        Self { service, tokens }
    }

    pub async fn check_order(&self, protocol: &str) -> Result<CheckOrderResponse, ZapayError> {
        let token = self.tokens.get()?;
        self.service.check_order(&token, protocol).await
    }
}
