// Testes de integração da fachada, com o transporte HTTP trocado por um
// mock em memória. Nenhuma chamada real sai daqui.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use serde_json::{Value, json};

use zapay_client::models::{BillingAddressDto, CardDto, DebtDto, PixDto};
use zapay_client::zapay::{WebhookAsyncPix, WebhookAsyncResponse};
use zapay_client::{HttpTransport, RequestOptions, RequestResponse, Zapay, ZapayConfig, ZapayError};

const BASE_URL: &str = "https://api.sandbox.test";

#[derive(Serialize)]
struct TestClaims {
    exp: i64,
    iat: i64,
}

/// Token com cara de JWT e expiração longe o bastante para o teste.
fn token_fixture() -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = TestClaims { exp: now + 3600, iat: now };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"segredo-de-teste")).unwrap()
}

struct MockTransport {
    requests: Mutex<Vec<RequestOptions>>,
    responses: Mutex<HashMap<String, RequestResponse>>,
}

impl MockTransport {
    fn new() -> Arc<Self> {
        let mock = Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(HashMap::new()),
        });
        mock.stub("/authentication/", 200, json!({ "token": token_fixture() }));
        mock
    }

    fn stub(&self, path: &str, status: u16, data: Value) {
        self.responses.lock().unwrap().insert(
            format!("{BASE_URL}{path}"),
            RequestResponse {
                data,
                status,
                status_text: if status == 200 { "OK".to_string() } else { "Bad Request".to_string() },
                headers: HashMap::new(),
            },
        );
    }

    fn recorded(&self) -> Vec<RequestOptions> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn request(&self, options: RequestOptions) -> Result<RequestResponse, ZapayError> {
        self.requests.lock().unwrap().push(options.clone());
        let response = self
            .responses
            .lock()
            .unwrap()
            .get(&options.url)
            .cloned()
            .unwrap_or(RequestResponse {
                data: Value::Null,
                status: 200,
                status_text: "OK".to_string(),
                headers: HashMap::new(),
            });
        Ok(response)
    }
}

async fn connect(mock: &Arc<MockTransport>) -> Zapay {
    let config = ZapayConfig::new("usuario", "senha").with_base_url(BASE_URL);
    let transport: Arc<dyn HttpTransport> = Arc::clone(mock) as Arc<dyn HttpTransport>;
    Zapay::connect(config, transport).await.unwrap()
}

fn debts_stub() -> Value {
    json!({
        "protocol": "5f1e9b2c-protocolo",
        "debts": [
            {
                "id": "D202600042",
                "amount": 149.99,
                "title": "IPVA 2026",
                "type": "ipva",
                "description": "IPVA 2026 - cota única",
                "due_date": "2026-01-05",
                "distinct": ["D202600043"]
            }
        ],
        "vehicle": {
            "renavam": "00194483649",
            "license_plate": "KYC2559",
            "model": "ONIX 1.0",
            "fabrication_year": 2021,
            "model_year": 2022
        }
    })
}

#[tokio::test]
async fn debts_maps_amounts_and_vehicle_into_dtos() {
    let mock = MockTransport::new();
    mock.stub("/zapi/debts/", 200, debts_stub());
    let zapay = connect(&mock).await;

    let response = zapay.debts("MG", "KYC2559", "00194483649").await.unwrap();

    assert_eq!(response.protocol, "5f1e9b2c-protocolo");
    assert_eq!(response.debts.len(), 1);
    let debt = &response.debts[0];
    assert_eq!(debt.amount_in_cents, 14999);
    assert_eq!(debt.debt_type, "ipva");
    assert_eq!(debt.due_date, "2026-01-05T00:00:00.000Z");
    assert_eq!(debt.distinct.as_deref(), Some(&["D202600043".to_string()][..]));
    assert_eq!(debt.required, None);
    assert_eq!(response.vehicle.plate, "KYC2559");
    assert_eq!(response.vehicle.renavam, "00194483649");
    assert_eq!(response.vehicle.fabrication_year, Some(2021));
    assert_eq!(response.vehicle.model_year, Some(2022));
    assert_eq!(response.vehicle.owner, None);

    // a consulta vai autenticada e com o corpo em snake_case
    let requests = mock.recorded();
    assert_eq!(requests.len(), 2);
    let debts_request = &requests[1];
    assert!(debts_request
        .headers
        .iter()
        .any(|(name, value)| name == "Authorization" && value.starts_with("JWT ")));
    let body = debts_request.body.as_ref().unwrap();
    assert_eq!(body["state"], "MG");
    assert_eq!(body["license_plate"], "KYC2559");
    assert_eq!(body["renavam"], "00194483649");
}

#[tokio::test]
async fn authentication_request_carries_no_token() {
    let mock = MockTransport::new();
    let _zapay = connect(&mock).await;

    let requests = mock.recorded();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, format!("{BASE_URL}/authentication/"));
    assert!(requests[0].headers.iter().all(|(name, _)| name != "Authorization"));
}

#[tokio::test]
async fn invalid_inputs_fail_before_any_network_call() {
    let mock = MockTransport::new();
    let zapay = connect(&mock).await;

    // estado indisponível, placa malformada e renavam com verificador errado
    assert!(matches!(zapay.debts("TO", "KYC2559", "00194483649").await, Err(ZapayError::Validation(_))));
    assert!(matches!(zapay.debts("MG", "KY2559", "00194483649").await, Err(ZapayError::Validation(_))));
    assert!(matches!(zapay.debts("MG", "KYC2559", "00194483640").await, Err(ZapayError::Validation(_))));

    // só a autenticação do connect chegou ao transporte
    assert_eq!(mock.recorded().len(), 1);
}

#[tokio::test]
async fn async_debts_passes_the_processing_status_through() {
    let mock = MockTransport::new();
    mock.stub(
        "/zapi/debts/?async=true",
        200,
        json!({ "protocol": "5f1e9b2c-protocolo", "status": "processing" }),
    );
    let zapay = connect(&mock).await;

    let response = zapay.async_debts("MG", "kyc2559", "00194483649").await.unwrap();
    assert_eq!(response.status, "processing");
    assert_eq!(response.protocol, "5f1e9b2c-protocolo");
}

#[tokio::test]
async fn confirmation_maps_year_and_type() {
    let mock = MockTransport::new();
    mock.stub(
        "/zapi/confirmation/",
        200,
        json!({
            "confirmation": [
                { "id": "C900", "amount": 149.99, "year": 2026, "type": "ipva" }
            ]
        }),
    );
    let zapay = connect(&mock).await;

    let debts = vec![debt_dto_fixture()];
    let response = zapay.confirmation("5f1e9b2c-protocolo", "MG", debts).await.unwrap();
    assert_eq!(response.confirmations.len(), 1);
    assert_eq!(response.confirmations[0].amount_in_cents, 14999);
    assert_eq!(response.confirmations[0].debt_year, 2026);

    let body = mock.recorded()[1].body.clone().unwrap();
    assert_eq!(body["ids"][0], "D202600042");
    assert_eq!(body["state"], "MG");
}

#[tokio::test]
async fn check_order_round_trips_the_protocol_status() {
    let mock = MockTransport::new();
    mock.stub(
        "/zapi/order/",
        200,
        json!({
            "order": { "status": "CHECKOUT_FAIL" },
            "bills": [
                { "id": "B102", "amount": 25.0, "status": "awaiting_payment" }
            ]
        }),
    );
    let zapay = connect(&mock).await;

    let response = zapay.check_order("5f1e9b2c-protocolo").await.unwrap();
    assert_eq!(response.order.status, "CHECKOUT_FAIL");
    assert_eq!(response.bills[0].amount_in_cents, 2500);
    assert_eq!(response.bills[0].authorization_code, None);
}

#[tokio::test]
async fn unknown_order_status_is_a_validation_failure() {
    let mock = MockTransport::new();
    mock.stub(
        "/zapi/order/",
        200,
        json!({ "order": { "status": "DONE" }, "bills": [] }),
    );
    let zapay = connect(&mock).await;

    assert!(matches!(
        zapay.check_order("5f1e9b2c-protocolo").await,
        Err(ZapayError::Validation(_))
    ));
}

#[tokio::test]
async fn installments_floor_fees_into_basis_points() {
    let mock = MockTransport::new();
    mock.stub(
        "/zapi/installments/",
        200,
        json!({
            "installmentsPlans": [
                {
                    "installments": 3,
                    "amount": 149.99,
                    "total_amount": 162.0,
                    "type": "credit",
                    "fee": 8.01,
                    "coupon": true,
                    "monthly_fee": 2.67
                }
            ]
        }),
    );
    let zapay = connect(&mock).await;

    let response = zapay
        .installments("5f1e9b2c-protocolo", vec![debt_dto_fixture()], Some("CUPOM10"))
        .await
        .unwrap();
    let plan = &response.installments_plans[0];
    assert_eq!(plan.amount_in_cents, 14999);
    assert_eq!(plan.total_amount_in_cents, 16200);
    assert_eq!(plan.fee_percent, 801);
    assert_eq!(plan.monthly_fee_percent, 267);
    assert!(plan.may_apply_coupon);

    let body = mock.recorded()[1].body.clone().unwrap();
    assert_eq!(body["promotional_ticket"], "CUPOM10");
}

#[tokio::test]
async fn card_checkout_builds_the_expected_body() {
    let mock = MockTransport::new();
    mock.stub(
        "/zapi/checkout/",
        200,
        json!({ "success": true, "status": "PAYMENT_INITIATED" }),
    );
    let zapay = connect(&mock).await;

    let card = CardDto {
        document: "12345678901".to_string(),
        number: "4111111111111111".to_string(),
        brand: "visa".to_string(),
        holder: "JOSE M SILVA".to_string(),
        expiration_date: "1229".to_string(),
        cvv: "123".to_string(),
        billing_address: BillingAddressDto {
            zip_code: Some("30140071".to_string()),
            address: None,
            neighborhood: None,
            city: None,
            number: None,
        },
    };
    let response = zapay
        .card_checkout("5f1e9b2c-protocolo", vec![debt_dto_fixture()], 3, card, None, None, None)
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.status.as_deref(), Some("PAYMENT_INITIATED"));

    let body = mock.recorded()[1].body.clone().unwrap();
    assert_eq!(body["protocol"], "5f1e9b2c-protocolo");
    assert_eq!(body["installmentPlan"], 3);
    assert_eq!(body["debts"][0], "D202600042");
    assert_eq!(body["card"]["expirationDate"], "1229");
    assert_eq!(body["card"]["billingAddress"]["zipCode"], "30140071");
    // cupom ausente não entra no corpo
    assert!(body.get("promotional_ticket").is_none());
    assert!(body.get("customer").is_none());
}

#[tokio::test]
async fn pix_checkout_sends_the_payer() {
    let mock = MockTransport::new();
    mock.stub("/zapi/checkout/", 200, json!({ "success": true }));
    let zapay = connect(&mock).await;

    let pix = PixDto { document: "12345678000199".to_string(), name: "Maria".to_string() };
    let response = zapay
        .pix_checkout("5f1e9b2c-protocolo", vec![debt_dto_fixture()], pix, None, None, None)
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.status, None);

    let body = mock.recorded()[1].body.clone().unwrap();
    assert_eq!(body["pix"]["document"], "12345678000199");
    assert!(body.get("installmentPlan").is_none());
}

#[tokio::test]
async fn webhook_register_accepts_the_plate_shaped_url() {
    let mock = MockTransport::new();
    mock.stub("/zapi/endpoint-register/", 200, json!({ "success": true }));
    let zapay = connect(&mock).await;

    let response = zapay.webhook_register("KYC2559").await.unwrap();
    assert!(response.success);

    assert!(matches!(
        zapay.webhook_register("https://example.com/webhook").await,
        Err(ZapayError::Validation(_))
    ));
}

#[tokio::test]
async fn webhook_report_validates_without_touching_the_network() {
    let mock = MockTransport::new();
    let zapay = connect(&mock).await;

    let notification = WebhookAsyncResponse {
        protocol: "5f1e9b2c-protocolo".to_string(),
        status: "BARCODE_EMITTED".to_string(),
        message: Some("boleto emitido".to_string()),
        success: Some(true),
        pix: Some(WebhookAsyncPix {
            qr_code_url: "https://pix.example.com/qr/1".to_string(),
            qr_code_data: "00020126330014br.gov.bcb.pix".to_string(),
            expiration_date: "2026-02-01T12:00:00.000Z".to_string(),
        }),
    };
    let response = zapay.webhook_report(notification).await.unwrap();
    let report = response.webhook_report;
    assert_eq!(report.status, "BARCODE_EMITTED");
    assert_eq!(report.pix.as_ref().unwrap().expiration_date, "2026-02-01T12:00:00.000Z");

    // nada além da autenticação passou pelo transporte
    assert_eq!(mock.recorded().len(), 1);

    let bad = WebhookAsyncResponse {
        protocol: "5f1e9b2c-protocolo".to_string(),
        status: "BARCODE_EMITTED".to_string(),
        message: None,
        success: None,
        pix: Some(WebhookAsyncPix {
            qr_code_url: String::new(),
            qr_code_data: String::new(),
            expiration_date: "amanhã".to_string(),
        }),
    };
    assert!(matches!(zapay.webhook_report(bad).await, Err(ZapayError::Validation(_))));
}

#[tokio::test]
async fn vehicle_lookup_validates_the_three_parts() {
    let mock = MockTransport::new();
    mock.stub(
        "/zapi/vehicle/KYC2559",
        200,
        json!({ "license_plate": "KYC2559", "renavam": "00194483649", "uf": "MG" }),
    );
    let zapay = connect(&mock).await;

    let response = zapay.vehicle("kyc2559").await.unwrap();
    assert_eq!(response.vehicle.plate, "KYC2559");
    assert_eq!(response.vehicle.state, "MG");

    let request = &mock.recorded()[1];
    assert_eq!(request.url, format!("{BASE_URL}/zapi/vehicle/KYC2559"));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn api_failures_surface_detail_and_error() {
    let mock = MockTransport::new();
    mock.stub(
        "/zapi/debts/",
        400,
        json!({ "detail": "Veículo não encontrado", "error": "VEHICLE_NOT_FOUND" }),
    );
    let zapay = connect(&mock).await;

    match zapay.debts("MG", "KYC2559", "00194483649").await {
        Err(ZapayError::Api { error, detail }) => {
            assert_eq!(error, "VEHICLE_NOT_FOUND");
            assert_eq!(detail, "Veículo não encontrado");
        }
        other => panic!("esperava falha da API, veio {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_fall_back_to_the_generic_failure() {
    let mock = MockTransport::new();
    mock.stub("/zapi/order/", 500, Value::Null);
    let zapay = connect(&mock).await;

    match zapay.check_order("5f1e9b2c-protocolo").await {
        Err(ZapayError::Api { error, detail }) => {
            assert_eq!(error, "Erro Desconhecido");
            assert_eq!(detail, "Não foi possível completar a request");
        }
        other => panic!("esperava falha genérica, veio {other:?}"),
    }
}

#[tokio::test]
async fn shutdown_is_idempotent() {
    let mock = MockTransport::new();
    let zapay = connect(&mock).await;
    zapay.shutdown();
    zapay.shutdown();
}

fn debt_dto_fixture() -> DebtDto {
    DebtDto {
        id: "D202600042".to_string(),
        amount_in_cents: 14999,
        title: "IPVA 2026".to_string(),
        debt_type: "ipva".to_string(),
        description: "IPVA 2026 - cota única".to_string(),
        due_date: "2026-01-05T00:00:00.000Z".to_string(),
        required: None,
        depends_on: None,
        distinct: None,
    }
}
