// src/models/debt.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::common::validation::{
    Parsed, field_error, format_iso_date, parse_flexible_date, single_field_failure,
    validate_due_date, validate_id_items,
};

// --- Enums ---

/// Natureza de um débito veicular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtType {
    Ipva,
    Licensing,
    Ticket,
}

impl DebtType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtType::Ipva => "ipva",
            DebtType::Licensing => "licensing",
            DebtType::Ticket => "ticket",
        }
    }

    pub fn parse(value: &str) -> Option<DebtType> {
        match value {
            "ipva" => Some(DebtType::Ipva),
            "licensing" => Some(DebtType::Licensing),
            "ticket" => Some(DebtType::Ticket),
            _ => None,
        }
    }
}

pub fn validate_debt_type(value: &str) -> Result<(), ValidationError> {
    if DebtType::parse(value).is_some() {
        return Ok(());
    }
    Err(field_error("debt_type", value, "não é um tipo de débito conhecido"))
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DebtDto {
    #[validate(length(min = 2, message = "O id precisa de ao menos 2 caracteres."))]
    pub id: String,

    #[validate(range(min = 1, message = "O valor precisa ser positivo."))]
    pub amount_in_cents: i64,

    #[validate(length(min = 2, message = "O título precisa de ao menos 2 caracteres."))]
    pub title: String,

    #[validate(custom(function = validate_debt_type))]
    pub debt_type: String,

    #[validate(length(min = 2, message = "A descrição precisa de ao menos 2 caracteres."))]
    pub description: String,

    #[validate(custom(function = validate_due_date))]
    pub due_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = validate_id_items))]
    pub depends_on: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = validate_id_items))]
    pub distinct: Option<Vec<String>>,
}

/// Débito validado. `depends_on` e `distinct` referenciam ids de outros
/// débitos do mesmo protocolo.
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    pub id: String,
    pub amount_in_cents: i64,
    pub title: String,
    pub debt_type: DebtType,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub required: Option<bool>,
    pub depends_on: Option<Vec<String>>,
    pub distinct: Option<Vec<String>>,
}

impl Debt {
    pub fn from_dto(dto: DebtDto) -> Parsed<Debt> {
        dto.validate()?;
        let debt_type = DebtType::parse(&dto.debt_type)
            .ok_or_else(|| single_field_failure("debt_type", field_error("debt_type", &dto.debt_type, "não é um tipo de débito conhecido")))?;
        let due_date = parse_flexible_date(&dto.due_date)
            .ok_or_else(|| single_field_failure("due_date", field_error("date", &dto.due_date, "não é uma data válida")))?;
        Ok(Debt {
            id: dto.id,
            amount_in_cents: dto.amount_in_cents,
            title: dto.title,
            debt_type,
            description: dto.description,
            due_date,
            required: dto.required,
            depends_on: dto.depends_on,
            distinct: dto.distinct,
        })
    }

    pub fn to_dto(&self) -> DebtDto {
        DebtDto {
            id: self.id.clone(),
            amount_in_cents: self.amount_in_cents,
            title: self.title.clone(),
            debt_type: self.debt_type.as_str().to_string(),
            description: self.description.clone(),
            due_date: format_iso_date(&self.due_date),
            required: self.required,
            depends_on: self.depends_on.clone(),
            distinct: self.distinct.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> DebtDto {
        DebtDto {
            id: "D202600042".to_string(),
            amount_in_cents: 14999,
            title: "IPVA 2026".to_string(),
            debt_type: "ipva".to_string(),
            description: "IPVA 2026 - cota única".to_string(),
            due_date: "2026-01-05T00:00:00.000Z".to_string(),
            required: None,
            depends_on: None,
            distinct: Some(vec!["D202600043".to_string()]),
        }
    }

    #[test]
    fn valid_dto_round_trips_losslessly() {
        let original = dto();
        let debt = Debt::from_dto(original.clone()).unwrap();
        assert_eq!(debt.debt_type, DebtType::Ipva);
        assert_eq!(debt.to_dto(), original);
    }

    #[test]
    fn absent_optionals_stay_absent_in_json() {
        let debt = Debt::from_dto(dto()).unwrap();
        let json = serde_json::to_value(debt.to_dto()).unwrap();
        assert!(json.get("required").is_none());
        assert!(json.get("dependsOn").is_none());
        assert_eq!(json["distinct"][0], "D202600043");
    }

    #[test]
    fn unknown_debt_type_identifies_the_field() {
        let mut bad = dto();
        bad.debt_type = "dpvat".to_string();
        let failure = Debt::from_dto(bad).unwrap_err();
        assert!(failure.field_errors().contains_key("debt_type"));
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut bad = dto();
        bad.amount_in_cents = 0;
        let failure = Debt::from_dto(bad).unwrap_err();
        assert!(failure.field_errors().contains_key("amount_in_cents"));
    }

    #[test]
    fn unparseable_due_date_is_rejected() {
        let mut bad = dto();
        bad.due_date = "05/01/2026".to_string();
        assert!(Debt::from_dto(bad).is_err());
    }

    #[test]
    fn dependency_items_need_two_characters() {
        let mut bad = dto();
        bad.depends_on = Some(vec!["x".to_string()]);
        let failure = Debt::from_dto(bad).unwrap_err();
        assert!(failure.field_errors().contains_key("depends_on"));
    }
}
