// src/models/webhook.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{
    Parsed, field_error, format_iso_date, parse_iso_date, single_field_failure, validate_iso_date,
};
use crate::models::protocol::{ProtocolStatus, validate_protocol_status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPixDto {
    pub qr_code_url: String,

    pub qr_code_data: String,

    // Aqui a API manda o ISO-8601 completo, sem a forma só-data.
    #[validate(custom(function = validate_iso_date))]
    pub expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WebhookReportDto {
    #[validate(length(min = 1, message = "O protocolo não pode ser vazio."))]
    pub protocol: String,

    #[validate(custom(function = validate_protocol_status))]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub pix: Option<WebhookPixDto>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookPix {
    pub qr_code_url: String,
    pub qr_code_data: String,
    pub expiration_date: DateTime<Utc>,
}

/// Notificação assíncrona recebida no endpoint registrado.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookReport {
    pub protocol: String,
    pub status: ProtocolStatus,
    pub message: Option<String>,
    pub success: Option<bool>,
    pub pix: Option<WebhookPix>,
}

impl WebhookReport {
    pub fn from_dto(dto: WebhookReportDto) -> Parsed<WebhookReport> {
        dto.validate()?;
        let status = ProtocolStatus::parse(&dto.status)
            .ok_or_else(|| single_field_failure("status", field_error("protocol_status", &dto.status, "não é uma situação de protocolo conhecida")))?;
        let pix = match dto.pix {
            Some(pix_dto) => {
                let expiration_date = parse_iso_date(&pix_dto.expiration_date).ok_or_else(|| {
                    single_field_failure(
                        "expiration_date",
                        field_error("date_iso", &pix_dto.expiration_date, "não é uma data ISO-8601 válida"),
                    )
                })?;
                Some(WebhookPix {
                    qr_code_url: pix_dto.qr_code_url,
                    qr_code_data: pix_dto.qr_code_data,
                    expiration_date,
                })
            }
            None => None,
        };
        Ok(WebhookReport {
            protocol: dto.protocol,
            status,
            message: dto.message,
            success: dto.success,
            pix,
        })
    }

    pub fn to_dto(&self) -> WebhookReportDto {
        WebhookReportDto {
            protocol: self.protocol.clone(),
            status: self.status.as_str().to_string(),
            message: self.message.clone(),
            success: self.success,
            pix: self.pix.as_ref().map(|pix| WebhookPixDto {
                qr_code_url: pix.qr_code_url.clone(),
                qr_code_data: pix.qr_code_data.clone(),
                expiration_date: format_iso_date(&pix.expiration_date),
            }),
        }
    }
}
