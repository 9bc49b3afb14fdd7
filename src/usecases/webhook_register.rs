// src/usecases/webhook_register.rs

use std::sync::Arc;

use crate::common::error::ZapayError;
use crate::models::url::Url;
use crate::models::webhook::WebhookReport;
use crate::services::zapay_service::ZapayService;
use crate::usecases::authentication::TokenCell;

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookRegisterResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookReportResponse {
    pub webhook_report: WebhookReport,
}

pub struct WebhookRegisterUseCase {
    service: Arc<ZapayService>,
    tokens: TokenCell,
}

impl WebhookRegisterUseCase {
    pub fn new(service: Arc<ZapayService>, tokens: TokenCell) -> Self {
        Self { service, tokens }
    }

    pub async fn webhook_register(&self, url: &Url) -> Result<WebhookRegisterResponse, ZapayError> {
        let token = self.tokens.get()?;
        self.service.webhook_register(&token, url).await
    }

    /// O relato do webhook não passa pela rede: o chamador recebeu a
    /// notificação e só precisa do valor validado de volta.
    pub async fn webhook_report(&self, webhook_report: WebhookReport) -> Result<WebhookReportResponse, ZapayError> {
        Ok(WebhookReportResponse { webhook_report })
    }
}
