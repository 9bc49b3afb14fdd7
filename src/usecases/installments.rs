// src/usecases/installments.rs

use std::sync::Arc;

use crate::common::error::ZapayError;
use crate::models::debt::Debt;
use crate::models::installment_plan::InstallmentPlan;
use crate::services::zapay_service::ZapayService;
use crate::usecases::authentication::TokenCell;

#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentsResponse {
    pub installments_plans: Vec<InstallmentPlan>,
}

pub struct InstallmentsUseCase {
    service: Arc<ZapayService>,
    tokens: TokenCell,
}

impl InstallmentsUseCase {
    pub fn new(service: Arc<ZapayService>, tokens: TokenCell) -> Self {
        Self { service, tokens }
    }

    pub async fn installments(
        &self,
        protocol: &str,
        debts: &[Debt],
        coupon: Option<&str>,
    ) -> Result<InstallmentsResponse, ZapayError> {
        let token = self.tokens.get()?;
        self.service.installments(&token, protocol, debts, coupon).await
    }
}
