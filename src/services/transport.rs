// src/services/transport.rs

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::common::error::ZapayError;

#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct RequestResponse {
    pub data: Value,
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
}

/// Contrato mínimo que a camada de serviço exige de um cliente HTTP.
/// Nos testes injetamos uma implementação em memória no lugar do reqwest.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(&self, options: RequestOptions) -> Result<RequestResponse, ZapayError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request(&self, options: RequestOptions) -> Result<RequestResponse, ZapayError> {
        let mut builder = self.client.request(options.method, options.url.as_str());
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            })
            .collect();

        // Corpos vazios ou que não são JSON viram Null; quem decide se isso
        // é erro é a camada de serviço, olhando o status.
        let text = response.text().await?;
        let data = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(RequestResponse { data, status, status_text, headers })
    }
}
