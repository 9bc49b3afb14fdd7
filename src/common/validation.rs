// src/common/validation.rs

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

/// Resultado de toda conversão DTO -> entidade: ou o valor validado, ou a
/// descrição estruturada de qual restrição falhou em qual campo.
pub type Parsed<T> = Result<T, ValidationErrors>;

// --- Padrões compartilhados entre as entidades ---

/// Placa no padrão nacional (inclui o formato Mercosul na 5ª posição).
pub static RE_PLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9][A-Z0-9][0-9]{2}$").unwrap());

// CPF (11 dígitos) ou CNPJ (14 dígitos). O padrão é propositalmente não
// ancorado: é o formato que a API remota aceita.
pub static RE_DOCUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{11}|[0-9]{14}").unwrap());

pub static RE_CARD_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{13,}").unwrap());

pub static RE_EXPIRATION_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}").unwrap());

pub static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{11}").unwrap());

/// Token JWT: dois ou três segmentos separados por ponto, alfabeto base64url.
pub static RE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-_=]+\.[A-Za-z0-9\-_=]+\.?[A-Za-z0-9\-_.+/=]*$").unwrap());

/// Pesos do dígito verificador do renavam, aplicados aos 10 primeiros dígitos.
const RENAVAM_WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Valida o dígito verificador de um renavam de 11 dígitos.
///
/// Sequências com todos os dígitos iguais são rejeitadas antes do cálculo:
/// elas satisfazem a soma ponderada de forma degenerada.
pub fn is_valid_renavam(value: &str) -> bool {
    if value.len() != 11 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u32> = value.bytes().map(|b| u32::from(b - b'0')).collect();
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }
    let sum: u32 = digits[..10]
        .iter()
        .zip(RENAVAM_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();
    let check_digit = match (sum * 10) % 11 {
        10 => 0,
        digit => digit,
    };
    check_digit == digits[10]
}

// --- Datas ---

/// Aceita RFC 3339 completo ou apenas a data (`AAAA-MM-DD`), sempre em UTC.
pub fn parse_flexible_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Somente RFC 3339 / ISO-8601 completo (campo `expiration_date` do pix).
pub fn parse_iso_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Serializa no mesmo formato que a API usa nas respostas (milissegundos + Z).
pub fn format_iso_date(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// --- Validadores de campo reutilizados pelos derives ---

pub fn validate_due_date(value: &str) -> Result<(), ValidationError> {
    if parse_flexible_date(value).is_some() {
        return Ok(());
    }
    Err(field_error("date", value, "não é uma data válida"))
}

pub fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    if parse_iso_date(value).is_some() {
        return Ok(());
    }
    Err(field_error("date_iso", value, "não é uma data ISO-8601 válida"))
}

/// Placas chegam em qualquer caixa; a comparação é feita em maiúsculas.
pub fn validate_plate_field(value: &str) -> Result<(), ValidationError> {
    if RE_PLATE.is_match(&value.to_uppercase()) {
        return Ok(());
    }
    Err(field_error("plate", value, "não é uma placa válida"))
}

pub fn validate_renavam_field(value: &str) -> Result<(), ValidationError> {
    if is_valid_renavam(value) {
        return Ok(());
    }
    Err(field_error("renavam", value, "não é um renavam válido"))
}

/// Listas de ids de débito: cada item precisa de pelo menos 2 caracteres.
pub fn validate_id_items(ids: &[String]) -> Result<(), ValidationError> {
    if ids.iter().all(|id| id.len() >= 2) {
        return Ok(());
    }
    let mut error = ValidationError::new("length");
    error.message = Some(Cow::from("todo id precisa de ao menos 2 caracteres"));
    Err(error)
}

/// Monta um `ValidationError` já com a mensagem e o valor recebido.
pub fn field_error(code: &'static str, value: &str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error.add_param(Cow::from("value"), &value);
    error
}

/// Falha de um validador de valor único (placa, renavam, token, url).
pub fn single_field_failure(field: &'static str, error: ValidationError) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}
