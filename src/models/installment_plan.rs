// src/models/installment_plan.rs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::common::validation::{Parsed, field_error, single_field_failure};

// --- Enums ---

/// Modalidade de parcelamento oferecida pela API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentType {
    Credit,
}

impl InstallmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallmentType::Credit => "credit",
        }
    }

    pub fn parse(value: &str) -> Option<InstallmentType> {
        match value {
            "credit" => Some(InstallmentType::Credit),
            _ => None,
        }
    }
}

pub fn validate_installment_type(value: &str) -> Result<(), ValidationError> {
    if InstallmentType::parse(value).is_some() {
        return Ok(());
    }
    Err(field_error("installment_type", value, "não é uma modalidade de parcelamento conhecida"))
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_total_covers_amount))]
pub struct InstallmentPlanDto {
    #[validate(range(min = 1, message = "O número de parcelas precisa ser positivo."))]
    pub installments: i64,

    #[validate(range(min = 1, message = "O valor precisa ser positivo."))]
    pub amount_in_cents: i64,

    #[validate(range(min = 1, message = "O valor total precisa ser positivo."))]
    pub total_amount_in_cents: i64,

    #[validate(custom(function = validate_installment_type))]
    pub installment_type: String,

    // Taxas em pontos-base (centésimos de por cento)
    #[validate(range(min = 0, max = 10000, message = "A taxa fica entre 0 e 10000 pontos-base."))]
    pub fee_percent: i64,

    pub may_apply_coupon: bool,

    #[validate(range(min = 0, max = 10000, message = "A taxa mensal fica entre 0 e 10000 pontos-base."))]
    pub monthly_fee_percent: i64,
}

// O total parcelado nunca fica abaixo do valor à vista.
fn validate_total_covers_amount(dto: &InstallmentPlanDto) -> Result<(), ValidationError> {
    if dto.total_amount_in_cents >= dto.amount_in_cents {
        return Ok(());
    }
    let mut error = ValidationError::new("total_amount_in_cents");
    error.message = Some("o valor total não pode ser menor que o valor base".into());
    Err(error)
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentPlan {
    pub installments: i64,
    pub amount_in_cents: i64,
    pub total_amount_in_cents: i64,
    pub installment_type: InstallmentType,
    pub fee_percent: i64,
    pub may_apply_coupon: bool,
    pub monthly_fee_percent: i64,
}

impl InstallmentPlan {
    pub fn from_dto(dto: InstallmentPlanDto) -> Parsed<InstallmentPlan> {
        dto.validate()?;
        let installment_type = InstallmentType::parse(&dto.installment_type).ok_or_else(|| {
            single_field_failure(
                "installment_type",
                field_error("installment_type", &dto.installment_type, "não é uma modalidade de parcelamento conhecida"),
            )
        })?;
        Ok(InstallmentPlan {
            installments: dto.installments,
            amount_in_cents: dto.amount_in_cents,
            total_amount_in_cents: dto.total_amount_in_cents,
            installment_type,
            fee_percent: dto.fee_percent,
            may_apply_coupon: dto.may_apply_coupon,
            monthly_fee_percent: dto.monthly_fee_percent,
        })
    }

    pub fn to_dto(&self) -> InstallmentPlanDto {
        InstallmentPlanDto {
            installments: self.installments,
            amount_in_cents: self.amount_in_cents,
            total_amount_in_cents: self.total_amount_in_cents,
            installment_type: self.installment_type.as_str().to_string(),
            fee_percent: self.fee_percent,
            may_apply_coupon: self.may_apply_coupon,
            monthly_fee_percent: self.monthly_fee_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> InstallmentPlanDto {
        InstallmentPlanDto {
            installments: 3,
            amount_in_cents: 14999,
            total_amount_in_cents: 16200,
            installment_type: "credit".to_string(),
            fee_percent: 801,
            may_apply_coupon: true,
            monthly_fee_percent: 267,
        }
    }

    #[test]
    fn valid_plan_round_trips() {
        let original = dto();
        let plan = InstallmentPlan::from_dto(original.clone()).unwrap();
        assert_eq!(plan.installment_type, InstallmentType::Credit);
        assert_eq!(plan.to_dto(), original);
    }

    #[test]
    fn total_equal_to_amount_is_accepted() {
        let mut raw = dto();
        raw.total_amount_in_cents = raw.amount_in_cents;
        assert!(InstallmentPlan::from_dto(raw).is_ok());
    }

    #[test]
    fn total_below_amount_is_rejected() {
        let mut bad = dto();
        bad.total_amount_in_cents = bad.amount_in_cents - 1;
        assert!(InstallmentPlan::from_dto(bad).is_err());
    }

    #[test]
    fn fees_above_ten_thousand_basis_points_are_rejected() {
        let mut bad = dto();
        bad.fee_percent = 10001;
        let failure = InstallmentPlan::from_dto(bad).unwrap_err();
        assert!(failure.field_errors().contains_key("fee_percent"));
    }

    #[test]
    fn unknown_installment_type_is_rejected() {
        let mut bad = dto();
        bad.installment_type = "debit".to_string();
        assert!(InstallmentPlan::from_dto(bad).is_err());
    }
}
