// src/zapay.rs

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::common::error::ZapayError;
use crate::config::ZapayConfig;
use crate::models::bill::BillDto;
use crate::models::card::{Card, CardDto};
use crate::models::client_details::{ClientDetails, ClientDetailsDto};
use crate::models::confirmation::ConfirmationDto;
use crate::models::customer::{Customer, CustomerDto};
use crate::models::debt::{Debt, DebtDto};
use crate::models::installment_plan::InstallmentPlanDto;
use crate::models::order::OrderDto;
use crate::models::pix::{Pix, PixDto};
use crate::models::plate::Plate;
use crate::models::renavam::Renavam;
use crate::models::state::State;
use crate::models::url::Url;
use crate::models::vehicle::{CompleteVehicleDto, SimpleVehicleDto};
use crate::models::webhook::{WebhookPixDto, WebhookReport, WebhookReportDto};
use crate::services::transport::HttpTransport;
use crate::services::zapay_service::ZapayService;
use crate::usecases::authentication::AuthenticationUseCase;
use crate::usecases::check_order::CheckOrderUseCase;
use crate::usecases::checkout::CheckoutUseCase;
use crate::usecases::confirmation::ConfirmationUseCase;
use crate::usecases::debts::DebtsUseCase;
use crate::usecases::installments::InstallmentsUseCase;
use crate::usecases::vehicle::VehicleUseCase;
use crate::usecases::webhook_register::WebhookRegisterUseCase;

// --- Respostas em forma de DTO, já prontas para serializar ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtsDtoResponse {
    pub protocol: String,
    pub debts: Vec<DebtDto>,
    pub vehicle: CompleteVehicleDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncDebtsDtoResponse {
    pub protocol: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationDtoResponse {
    pub confirmations: Vec<ConfirmationDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOrderDtoResponse {
    pub order: OrderDto,
    pub bills: Vec<BillDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentsDtoResponse {
    pub installments_plans: Vec<InstallmentPlanDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCheckoutDtoResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixCheckoutDtoResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRegisterDtoResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookReportDtoResponse {
    pub webhook_report: WebhookReportDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDtoResponse {
    pub vehicle: SimpleVehicleDto,
}

// --- Notificação crua recebida no endpoint registrado (snake_case) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookAsyncPix {
    pub qr_code_url: String,
    pub qr_code_data: String,
    pub expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookAsyncResponse {
    pub protocol: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix: Option<WebhookAsyncPix>,
}

/// Fachada pública do SDK. Recebe entrada crua (strings e DTOs), valida
/// tudo para dentro do domínio, chama a API e devolve DTOs prontos.
pub struct Zapay {
    authentication: AuthenticationUseCase,
    check_order: CheckOrderUseCase,
    checkout: CheckoutUseCase,
    confirmation: ConfirmationUseCase,
    debts: DebtsUseCase,
    installments: InstallmentsUseCase,
    webhook_register: WebhookRegisterUseCase,
    vehicle: VehicleUseCase,
}

impl Zapay {
    /// Autentica e monta o gráfico de casos de uso. O refresh do token fica
    /// agendado até o `shutdown`.
    pub async fn connect(
        config: ZapayConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Zapay, ZapayError> {
        let service = Arc::new(ZapayService::new(transport, config.base_url));
        let authentication =
            AuthenticationUseCase::new(Arc::clone(&service), config.username, config.password);
        authentication.authenticate().await?;

        let tokens = authentication.tokens();
        Ok(Zapay {
            check_order: CheckOrderUseCase::new(Arc::clone(&service), tokens.clone()),
            checkout: CheckoutUseCase::new(Arc::clone(&service), tokens.clone()),
            confirmation: ConfirmationUseCase::new(Arc::clone(&service), tokens.clone()),
            debts: DebtsUseCase::new(Arc::clone(&service), tokens.clone()),
            installments: InstallmentsUseCase::new(Arc::clone(&service), tokens.clone()),
            webhook_register: WebhookRegisterUseCase::new(Arc::clone(&service), tokens.clone()),
            vehicle: VehicleUseCase::new(Arc::clone(&service), tokens),
            authentication,
        })
    }

    pub async fn debts(
        &self,
        state_raw: &str,
        plate_raw: &str,
        renavam_raw: &str,
    ) -> Result<DebtsDtoResponse, ZapayError> {
        let state = State::from_raw(state_raw)?;
        let plate = Plate::from_raw(plate_raw)?;
        let renavam = Renavam::from_raw(renavam_raw)?;
        let response = self.debts.debts(state, &plate, &renavam).await?;
        Ok(DebtsDtoResponse {
            protocol: response.protocol,
            debts: response.debts.iter().map(Debt::to_dto).collect(),
            vehicle: response.vehicle.to_dto(),
        })
    }

    pub async fn async_debts(
        &self,
        state_raw: &str,
        plate_raw: &str,
        renavam_raw: &str,
    ) -> Result<AsyncDebtsDtoResponse, ZapayError> {
        let state = State::from_raw(state_raw)?;
        let plate = Plate::from_raw(plate_raw)?;
        let renavam = Renavam::from_raw(renavam_raw)?;
        let response = self.debts.async_debts(state, &plate, &renavam).await?;
        Ok(AsyncDebtsDtoResponse { protocol: response.protocol, status: response.status })
    }

    pub async fn confirmation(
        &self,
        protocol: &str,
        state_raw: &str,
        debts_dto: Vec<DebtDto>,
    ) -> Result<ConfirmationDtoResponse, ZapayError> {
        let state = State::from_raw(state_raw)?;
        let debts = Self::parse_debts(debts_dto)?;
        let response = self.confirmation.confirmation(protocol, state, &debts).await?;
        Ok(ConfirmationDtoResponse {
            confirmations: response.confirmations.iter().map(|c| c.to_dto()).collect(),
        })
    }

    pub async fn check_order(&self, protocol: &str) -> Result<CheckOrderDtoResponse, ZapayError> {
        let response = self.check_order.check_order(protocol).await?;
        Ok(CheckOrderDtoResponse {
            order: response.order.to_dto(),
            bills: response.bills.iter().map(|bill| bill.to_dto()).collect(),
        })
    }

    pub async fn installments(
        &self,
        protocol: &str,
        debts_dto: Vec<DebtDto>,
        coupon: Option<&str>,
    ) -> Result<InstallmentsDtoResponse, ZapayError> {
        let debts = Self::parse_debts(debts_dto)?;
        let response = self.installments.installments(protocol, &debts, coupon).await?;
        Ok(InstallmentsDtoResponse {
            installments_plans: response.installments_plans.iter().map(|plan| plan.to_dto()).collect(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn card_checkout(
        &self,
        protocol: &str,
        debts_dto: Vec<DebtDto>,
        installment_plan: i64,
        card_dto: CardDto,
        coupon: Option<&str>,
        client_details_dto: Option<ClientDetailsDto>,
        customer_dto: Option<CustomerDto>,
    ) -> Result<CardCheckoutDtoResponse, ZapayError> {
        let debts = Self::parse_debts(debts_dto)?;
        let card = Card::from_dto(card_dto)?;
        let client_details = Self::parse_client_details(client_details_dto)?;
        let customer = Self::parse_customer(customer_dto)?;
        let response = self
            .checkout
            .card_checkout(
                protocol,
                &debts,
                installment_plan,
                &card,
                coupon,
                client_details.as_ref(),
                customer.as_ref(),
            )
            .await?;
        Ok(CardCheckoutDtoResponse {
            success: response.success,
            status: response.status.map(|status| status.as_str().to_string()),
        })
    }

    pub async fn pix_checkout(
        &self,
        protocol: &str,
        debts_dto: Vec<DebtDto>,
        pix_dto: PixDto,
        coupon: Option<&str>,
        client_details_dto: Option<ClientDetailsDto>,
        customer_dto: Option<CustomerDto>,
    ) -> Result<PixCheckoutDtoResponse, ZapayError> {
        let debts = Self::parse_debts(debts_dto)?;
        let pix: Pix = PixDto::from_dto(pix_dto)?;
        let client_details = Self::parse_client_details(client_details_dto)?;
        let customer = Self::parse_customer(customer_dto)?;
        let response = self
            .checkout
            .pix_checkout(protocol, &debts, &pix, coupon, client_details.as_ref(), customer.as_ref())
            .await?;
        Ok(PixCheckoutDtoResponse {
            success: response.success,
            status: response.status.map(|status| status.as_str().to_string()),
        })
    }

    pub async fn webhook_register(&self, url_raw: &str) -> Result<WebhookRegisterDtoResponse, ZapayError> {
        let url = Url::from_raw(url_raw)?;
        let response = self.webhook_register.webhook_register(&url).await?;
        Ok(WebhookRegisterDtoResponse { success: response.success })
    }

    /// Valida uma notificação recebida no endpoint registrado e devolve o
    /// DTO correspondente. Não faz chamada de rede.
    pub async fn webhook_report(
        &self,
        notification: WebhookAsyncResponse,
    ) -> Result<WebhookReportDtoResponse, ZapayError> {
        let dto = WebhookReportDto {
            protocol: notification.protocol,
            status: notification.status,
            message: notification.message,
            success: notification.success,
            pix: notification.pix.map(|pix| WebhookPixDto {
                qr_code_url: pix.qr_code_url,
                qr_code_data: pix.qr_code_data,
                expiration_date: pix.expiration_date,
            }),
        };
        let report = WebhookReport::from_dto(dto)?;
        let response = self.webhook_register.webhook_report(report).await?;
        Ok(WebhookReportDtoResponse { webhook_report: response.webhook_report.to_dto() })
    }

    pub async fn vehicle(&self, plate_raw: &str) -> Result<VehicleDtoResponse, ZapayError> {
        let plate = Plate::from_raw(plate_raw)?;
        let response = self.vehicle.vehicle(&plate).await?;
        Ok(VehicleDtoResponse { vehicle: response.vehicle.to_dto() })
    }

    /// Cancela o refresh agendado do token. Idempotente.
    pub fn shutdown(&self) {
        self.authentication.shutdown();
    }

    fn parse_debts(debts_dto: Vec<DebtDto>) -> Result<Vec<Debt>, ZapayError> {
        let debts = debts_dto
            .into_iter()
            .map(Debt::from_dto)
            .collect::<Result<Vec<Debt>, _>>()?;
        Ok(debts)
    }

    fn parse_client_details(
        dto: Option<ClientDetailsDto>,
    ) -> Result<Option<ClientDetails>, ZapayError> {
        Ok(match dto {
            Some(dto) => Some(ClientDetailsDto::from_dto(dto)?),
            None => None,
        })
    }

    fn parse_customer(dto: Option<CustomerDto>) -> Result<Option<Customer>, ZapayError> {
        Ok(match dto {
            Some(dto) => Some(CustomerDto::from_dto(dto)?),
            None => None,
        })
    }
}
