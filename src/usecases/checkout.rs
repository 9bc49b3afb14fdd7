// src/usecases/checkout.rs

use std::sync::Arc;

use crate::common::error::ZapayError;
use crate::models::card::Card;
use crate::models::client_details::ClientDetails;
use crate::models::customer::Customer;
use crate::models::debt::Debt;
use crate::models::pix::Pix;
use crate::models::protocol::ProtocolStatus;
use crate::services::zapay_service::ZapayService;
use crate::usecases::authentication::TokenCell;

#[derive(Debug, Clone, PartialEq)]
pub struct CardCheckoutResponse {
    pub success: bool,
    pub status: Option<ProtocolStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PixCheckoutResponse {
    pub success: bool,
    pub status: Option<ProtocolStatus>,
}

pub struct CheckoutUseCase {
    service: Arc<ZapayService>,
    tokens: TokenCell,
}

impl CheckoutUseCase {
    pub fn new(service: Arc<ZapayService>, tokens: TokenCell) -> Self {
        Self { service, tokens }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn card_checkout(
        &self,
        protocol: &str,
        debts: &[Debt],
        installment_plan: i64,
        card: &Card,
        coupon: Option<&str>,
        client_details: Option<&ClientDetails>,
        customer: Option<&Customer>,
    ) -> Result<CardCheckoutResponse, ZapayError> {
        let token = self.tokens.get()?;
        self.service
            .card_checkout(&token, protocol, debts, installment_plan, card, coupon, client_details, customer)
            .await
    }

    pub async fn pix_checkout(
        &self,
        protocol: &str,
        debts: &[Debt],
        pix: &Pix,
        coupon: Option<&str>,
        client_details: Option<&ClientDetails>,
        customer: Option<&Customer>,
    ) -> Result<PixCheckoutResponse, ZapayError> {
        let token = self.tokens.get()?;
        self.service
            .pix_checkout(&token, protocol, debts, pix, coupon, client_details, customer)
            .await
    }
}
