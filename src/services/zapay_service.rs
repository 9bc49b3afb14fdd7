// src/services/zapay_service.rs

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::common::error::ZapayError;
use crate::models::bill::{Bill, BillDto};
use crate::models::card::Card;
use crate::models::client_details::ClientDetails;
use crate::models::confirmation::{Confirmation, ConfirmationDto};
use crate::models::customer::Customer;
use crate::models::debt::{Debt, DebtDto};
use crate::models::installment_plan::{InstallmentPlan, InstallmentPlanDto};
use crate::models::order::{Order, OrderDto};
use crate::models::pix::Pix;
use crate::models::plate::Plate;
use crate::models::protocol::ProtocolStatus;
use crate::models::renavam::Renavam;
use crate::models::state::State;
use crate::models::token::Token;
use crate::models::url::Url;
use crate::models::vehicle::{CompleteVehicle, CompleteVehicleDto, SimpleVehicle, SimpleVehicleDto};
use crate::services::transport::{HttpTransport, RequestOptions};
use crate::usecases::check_order::CheckOrderResponse;
use crate::usecases::checkout::{CardCheckoutResponse, PixCheckoutResponse};
use crate::usecases::confirmation::ConfirmationResponse;
use crate::usecases::debts::{AsyncDebtsResponse, DebtsResponse};
use crate::usecases::installments::InstallmentsResponse;
use crate::usecases::webhook_register::WebhookRegisterResponse;
use crate::usecases::vehicle::VehicleResponse;

// --- Formas que a API devolve na fiação (snake_case) ---

#[derive(Debug, Deserialize)]
struct ApiFailure {
    detail: String,
    error: String,
}

#[derive(Debug, Deserialize)]
struct AuthenticationWireResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct WireDebt {
    id: String,
    amount: f64,
    title: String,
    #[serde(rename = "type")]
    kind: String,
    description: String,
    due_date: String,
    #[serde(default)]
    required: Option<bool>,
    #[serde(default)]
    depends_on: Option<Vec<String>>,
    #[serde(default)]
    distinct: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct WireVehicle {
    renavam: String,
    license_plate: String,
    #[serde(default)]
    document: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    fabrication_year: Option<i32>,
    #[serde(default)]
    model_year: Option<i32>,
    #[serde(default)]
    chassi: Option<String>,
    #[serde(default)]
    venal_value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DebtsWireResponse {
    protocol: String,
    debts: Vec<WireDebt>,
    vehicle: WireVehicle,
}

#[derive(Debug, Deserialize)]
struct AsyncDebtsWireResponse {
    protocol: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct WireConfirmation {
    id: String,
    amount: f64,
    year: i32,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct ConfirmationWireResponse {
    confirmation: Vec<WireConfirmation>,
}

#[derive(Debug, Deserialize)]
struct WireOrder {
    status: String,
}

#[derive(Debug, Deserialize)]
struct WireBill {
    id: String,
    amount: f64,
    status: String,
    #[serde(default)]
    authorization_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CheckOrderWireResponse {
    order: WireOrder,
    bills: Vec<WireBill>,
}

#[derive(Debug, Deserialize)]
struct WireInstallmentPlan {
    installments: i64,
    amount: f64,
    total_amount: f64,
    #[serde(rename = "type")]
    kind: String,
    fee: f64,
    coupon: bool,
    monthly_fee: f64,
}

#[derive(Debug, Deserialize)]
struct InstallmentsWireResponse {
    // este campo vem em camelCase mesmo, diferente do resto da API
    #[serde(rename = "installmentsPlans")]
    installments_plans: Vec<WireInstallmentPlan>,
}

#[derive(Debug, Deserialize)]
struct CheckoutWireResponse {
    success: bool,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WebhookSyncWireResponse {
    success: bool,
}

#[derive(Debug, Deserialize)]
struct VehicleWireResponse {
    license_plate: String,
    renavam: String,
    uf: String,
}

/// Cliente das rotas da Zapay: monta as requisições, injeta o token e
/// valida cada resposta para dentro do domínio antes de devolvê-la.
pub struct ZapayService {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl ZapayService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into() }
    }

    /// Valores monetários chegam em reais; internamente tudo é centavo.
    fn to_cents(value: f64) -> i64 {
        (value * 100.0).floor() as i64
    }

    async fn request<R>(
        &self,
        method: Method,
        path: &str,
        token: Option<&Token>,
        body: Option<Value>,
        mut headers: Vec<(String, String)>,
    ) -> Result<R, ZapayError>
    where
        R: serde::de::DeserializeOwned,
    {
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("JWT {}", token.as_raw())));
        }
        let options = RequestOptions {
            url: format!("{}{}", self.base_url, path),
            method,
            headers,
            body,
        };
        let response = self.transport.request(options).await?;

        if response.status == 200 && !response.data.is_null() {
            return Ok(serde_json::from_value(response.data)?);
        }

        // Entre 400 e 499 a API costuma mandar `{detail, error}`; o resto
        // não tem corpo aproveitável.
        let failure = if (400..500).contains(&response.status) {
            serde_json::from_value::<ApiFailure>(response.data).ok()
        } else {
            None
        };
        tracing::error!(
            "🔥 Falha na chamada {} (status {} {})",
            path,
            response.status,
            response.status_text
        );
        match failure {
            Some(ApiFailure { detail, error }) => Err(ZapayError::Api { error, detail }),
            None => Err(ZapayError::unknown_api_failure()),
        }
    }

    async fn get<R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&Token>,
    ) -> Result<R, ZapayError> {
        self.request(Method::GET, path, token, None, Vec::new()).await
    }

    async fn post<R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        token: Option<&Token>,
    ) -> Result<R, ZapayError> {
        let headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        self.request(Method::POST, path, token, Some(body), headers).await
    }

    pub async fn authentication(&self, username: &str, password: &str) -> Result<Token, ZapayError> {
        let response: AuthenticationWireResponse = self
            .post("/authentication/", json!({ "username": username, "password": password }), None)
            .await?;
        Ok(Token::from_raw(&response.token)?)
    }

    pub async fn debts(
        &self,
        token: &Token,
        state: State,
        plate: &Plate,
        renavam: &Renavam,
    ) -> Result<DebtsResponse, ZapayError> {
        let body = json!({
            "state": state.as_raw(),
            "license_plate": plate.as_raw(),
            "renavam": renavam.as_raw(),
        });
        let response: DebtsWireResponse = self.post("/zapi/debts/", body, Some(token)).await?;

        let debts = response
            .debts
            .into_iter()
            .map(|debt| {
                Debt::from_dto(DebtDto {
                    id: debt.id,
                    amount_in_cents: Self::to_cents(debt.amount),
                    title: debt.title,
                    debt_type: debt.kind,
                    description: debt.description,
                    due_date: debt.due_date,
                    required: debt.required,
                    depends_on: debt.depends_on,
                    distinct: debt.distinct,
                })
            })
            .collect::<Result<Vec<Debt>, _>>()?;

        let vehicle = CompleteVehicle::from_dto(CompleteVehicleDto {
            renavam: response.vehicle.renavam,
            plate: response.vehicle.license_plate,
            document: response.vehicle.document,
            owner: response.vehicle.owner,
            model: response.vehicle.model,
            color: response.vehicle.color,
            fabrication_year: response.vehicle.fabrication_year,
            model_year: response.vehicle.model_year,
            chassis: response.vehicle.chassi,
            venal_value: response.vehicle.venal_value,
        })?;

        Ok(DebtsResponse { protocol: response.protocol, debts, vehicle })
    }

    pub async fn async_debts(
        &self,
        token: &Token,
        state: State,
        plate: &Plate,
        renavam: &Renavam,
    ) -> Result<AsyncDebtsResponse, ZapayError> {
        let body = json!({
            "state": state.as_raw(),
            "license_plate": plate.as_raw(),
            "renavam": renavam.as_raw(),
        });
        let response: AsyncDebtsWireResponse =
            self.post("/zapi/debts/?async=true", body, Some(token)).await?;
        Ok(AsyncDebtsResponse { protocol: response.protocol, status: response.status })
    }

    pub async fn confirmation(
        &self,
        token: &Token,
        protocol: &str,
        state: State,
        debts: &[Debt],
    ) -> Result<ConfirmationResponse, ZapayError> {
        let ids: Vec<&str> = debts.iter().map(|debt| debt.id.as_str()).collect();
        let body = json!({ "protocol": protocol, "state": state.as_raw(), "ids": ids });
        let response: ConfirmationWireResponse =
            self.post("/zapi/confirmation/", body, Some(token)).await?;

        let confirmations = response
            .confirmation
            .into_iter()
            .map(|confirmation| {
                Confirmation::from_dto(ConfirmationDto {
                    id: confirmation.id,
                    amount_in_cents: Self::to_cents(confirmation.amount),
                    debt_year: confirmation.year,
                    debt_type: confirmation.kind,
                })
            })
            .collect::<Result<Vec<Confirmation>, _>>()?;

        Ok(ConfirmationResponse { confirmations })
    }

    pub async fn check_order(
        &self,
        token: &Token,
        protocol: &str,
    ) -> Result<CheckOrderResponse, ZapayError> {
        let response: CheckOrderWireResponse = self
            .post("/zapi/order/", json!({ "protocol": protocol }), Some(token))
            .await?;

        let order = Order::from_dto(OrderDto { status: response.order.status })?;
        let bills = response
            .bills
            .into_iter()
            .map(|bill| {
                Bill::from_dto(BillDto {
                    id: bill.id,
                    amount_in_cents: Self::to_cents(bill.amount),
                    status: bill.status,
                    authorization_code: bill.authorization_code,
                })
            })
            .collect::<Result<Vec<Bill>, _>>()?;

        Ok(CheckOrderResponse { order, bills })
    }

    pub async fn installments(
        &self,
        token: &Token,
        protocol: &str,
        debts: &[Debt],
        coupon: Option<&str>,
    ) -> Result<InstallmentsResponse, ZapayError> {
        let ids: Vec<&str> = debts.iter().map(|debt| debt.id.as_str()).collect();
        let mut body = Map::new();
        body.insert("protocol".to_string(), json!(protocol));
        body.insert("debts".to_string(), json!(ids));
        if let Some(coupon) = coupon {
            body.insert("promotional_ticket".to_string(), json!(coupon));
        }
        let response: InstallmentsWireResponse =
            self.post("/zapi/installments/", Value::Object(body), Some(token)).await?;

        let installments_plans = response
            .installments_plans
            .into_iter()
            .map(|plan| {
                InstallmentPlan::from_dto(InstallmentPlanDto {
                    installments: plan.installments,
                    amount_in_cents: Self::to_cents(plan.amount),
                    total_amount_in_cents: Self::to_cents(plan.total_amount),
                    installment_type: plan.kind,
                    fee_percent: Self::to_cents(plan.fee),
                    may_apply_coupon: plan.coupon,
                    monthly_fee_percent: Self::to_cents(plan.monthly_fee),
                })
            })
            .collect::<Result<Vec<InstallmentPlan>, _>>()?;

        Ok(InstallmentsResponse { installments_plans })
    }

    async fn checkout<R>(
        &self,
        token: &Token,
        mut body: Map<String, Value>,
        debts: &[Debt],
        coupon: Option<&str>,
        client_details: Option<&ClientDetails>,
        customer: Option<&Customer>,
    ) -> Result<R, ZapayError>
    where
        R: serde::de::DeserializeOwned,
    {
        let ids: Vec<&str> = debts.iter().map(|debt| debt.id.as_str()).collect();
        body.insert("debts".to_string(), json!(ids));
        if let Some(coupon) = coupon {
            body.insert("promotional_ticket".to_string(), json!(coupon));
        }
        if let Some(client_details) = client_details {
            body.insert("client_details".to_string(), serde_json::to_value(client_details)?);
        }
        if let Some(customer) = customer {
            body.insert("customer".to_string(), serde_json::to_value(customer)?);
        }
        self.post("/zapi/checkout/", Value::Object(body), Some(token)).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn card_checkout(
        &self,
        token: &Token,
        protocol: &str,
        debts: &[Debt],
        installment_plan: i64,
        card: &Card,
        coupon: Option<&str>,
        client_details: Option<&ClientDetails>,
        customer: Option<&Customer>,
    ) -> Result<CardCheckoutResponse, ZapayError> {
        let mut body = Map::new();
        body.insert("protocol".to_string(), json!(protocol));
        body.insert("card".to_string(), serde_json::to_value(card.to_dto())?);
        body.insert("installmentPlan".to_string(), json!(installment_plan));
        let response: CheckoutWireResponse = self
            .checkout(token, body, debts, coupon, client_details, customer)
            .await?;
        Ok(CardCheckoutResponse {
            success: response.success,
            status: Self::parse_checkout_status(response.status)?,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn pix_checkout(
        &self,
        token: &Token,
        protocol: &str,
        debts: &[Debt],
        pix: &Pix,
        coupon: Option<&str>,
        client_details: Option<&ClientDetails>,
        customer: Option<&Customer>,
    ) -> Result<PixCheckoutResponse, ZapayError> {
        let mut body = Map::new();
        body.insert("protocol".to_string(), json!(protocol));
        body.insert("pix".to_string(), serde_json::to_value(pix)?);
        let response: CheckoutWireResponse = self
            .checkout(token, body, debts, coupon, client_details, customer)
            .await?;
        Ok(PixCheckoutResponse {
            success: response.success,
            status: Self::parse_checkout_status(response.status)?,
        })
    }

    fn parse_checkout_status(status: Option<String>) -> Result<Option<ProtocolStatus>, ZapayError> {
        match status {
            None => Ok(None),
            Some(raw) => {
                let order = Order::from_dto(OrderDto { status: raw })?;
                Ok(Some(order.status))
            }
        }
    }

    pub async fn webhook_register(
        &self,
        token: &Token,
        url: &Url,
    ) -> Result<WebhookRegisterResponse, ZapayError> {
        let response: WebhookSyncWireResponse = self
            .post("/zapi/endpoint-register/", json!({ "url": url.as_raw() }), Some(token))
            .await?;
        Ok(WebhookRegisterResponse { success: response.success })
    }

    pub async fn vehicle(&self, token: &Token, plate: &Plate) -> Result<VehicleResponse, ZapayError> {
        let path = format!("/zapi/vehicle/{}", plate.as_raw());
        let response: VehicleWireResponse = self.get(&path, Some(token)).await?;
        let vehicle = SimpleVehicle::from_dto(SimpleVehicleDto {
            plate: response.license_plate,
            renavam: response.renavam,
            state: response.uf,
        })?;
        Ok(VehicleResponse { vehicle })
    }
}
