// src/models/confirmation.rs

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::common::validation::{Parsed, field_error, single_field_failure};
use crate::models::debt::{DebtType, validate_debt_type};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_debt_year))]
pub struct ConfirmationDto {
    #[validate(length(min = 2, message = "O id precisa de ao menos 2 caracteres."))]
    pub id: String,

    #[validate(range(min = 1, message = "O valor precisa ser positivo."))]
    pub amount_in_cents: i64,

    pub debt_year: i32,

    #[validate(custom(function = validate_debt_type))]
    pub debt_type: String,
}

// O limite superior acompanha o ano corrente, por isso não dá para usar um
// `range` com literais.
fn validate_debt_year(dto: &ConfirmationDto) -> Result<(), ValidationError> {
    let current_year = Utc::now().year();
    if (1900..=current_year).contains(&dto.debt_year) {
        return Ok(());
    }
    let mut error = ValidationError::new("debt_year");
    error.message = Some("fora do intervalo entre 1900 e o ano corrente".into());
    Err(error)
}

/// Confirmação de que um débito específico será incluído no pagamento.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub id: String,
    pub amount_in_cents: i64,
    pub debt_year: i32,
    pub debt_type: DebtType,
}

impl Confirmation {
    pub fn from_dto(dto: ConfirmationDto) -> Parsed<Confirmation> {
        dto.validate()?;
        let debt_type = DebtType::parse(&dto.debt_type)
            .ok_or_else(|| single_field_failure("debt_type", field_error("debt_type", &dto.debt_type, "não é um tipo de débito conhecido")))?;
        Ok(Confirmation {
            id: dto.id,
            amount_in_cents: dto.amount_in_cents,
            debt_year: dto.debt_year,
            debt_type,
        })
    }

    pub fn to_dto(&self) -> ConfirmationDto {
        ConfirmationDto {
            id: self.id.clone(),
            amount_in_cents: self.amount_in_cents,
            debt_year: self.debt_year,
            debt_type: self.debt_type.as_str().to_string(),
        }
    }
}
