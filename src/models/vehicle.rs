// src/models/vehicle.rs

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::common::validation::{RE_DOCUMENT, Parsed, validate_plate_field, validate_renavam_field};
use crate::models::plate::Plate;
use crate::models::renavam::Renavam;
use crate::models::state::State;

// --- Veículo completo (resposta da consulta de débitos) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_vehicle_years))]
pub struct CompleteVehicleDto {
    #[validate(custom(function = validate_renavam_field))]
    pub renavam: String,

    #[validate(custom(function = validate_plate_field))]
    pub plate: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *RE_DOCUMENT, message = "O documento precisa ser um CPF ou CNPJ."))]
    pub document: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabrication_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venal_value: Option<String>,
}

// Ano de fabricação dentro de [1900, ano corrente]; ano do modelo igual ao
// de fabricação ou ao seguinte, quando ambos vierem.
fn validate_vehicle_years(dto: &CompleteVehicleDto) -> Result<(), ValidationError> {
    if let Some(fabrication) = dto.fabrication_year {
        let current_year = Utc::now().year();
        if !(1900..=current_year).contains(&fabrication) {
            let mut error = ValidationError::new("fabrication_year");
            error.message = Some("fora do intervalo entre 1900 e o ano corrente".into());
            return Err(error);
        }
    }
    if let (Some(fabrication), Some(model)) = (dto.fabrication_year, dto.model_year) {
        if model != fabrication && model != fabrication + 1 {
            let mut error = ValidationError::new("model_year");
            error.message = Some("o ano do modelo é o de fabricação ou o seguinte".into());
            return Err(error);
        }
    }
    Ok(())
}

/// Cadastro completo do veículo, como devolvido na consulta de débitos.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteVehicle {
    pub renavam: Renavam,
    pub plate: Plate,
    pub document: Option<String>,
    pub owner: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub fabrication_year: Option<i32>,
    pub model_year: Option<i32>,
    pub chassis: Option<String>,
    pub venal_value: Option<String>,
}

impl CompleteVehicle {
    pub fn from_dto(dto: CompleteVehicleDto) -> Parsed<CompleteVehicle> {
        dto.validate()?;
        let renavam = Renavam::from_raw(&dto.renavam)?;
        let plate = Plate::from_raw(&dto.plate)?;
        Ok(CompleteVehicle {
            renavam,
            plate,
            document: dto.document,
            owner: dto.owner,
            model: dto.model,
            color: dto.color,
            fabrication_year: dto.fabrication_year,
            model_year: dto.model_year,
            chassis: dto.chassis,
            venal_value: dto.venal_value,
        })
    }

    pub fn to_dto(&self) -> CompleteVehicleDto {
        CompleteVehicleDto {
            renavam: self.renavam.as_raw().to_string(),
            plate: self.plate.as_raw().to_string(),
            document: self.document.clone(),
            owner: self.owner.clone(),
            model: self.model.clone(),
            color: self.color.clone(),
            fabrication_year: self.fabrication_year,
            model_year: self.model_year,
            chassis: self.chassis.clone(),
            venal_value: self.venal_value.clone(),
        }
    }
}

// --- Veículo simples (consulta por placa) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimpleVehicleDto {
    #[validate(custom(function = validate_plate_field))]
    pub plate: String,

    #[validate(custom(function = validate_renavam_field))]
    pub renavam: String,

    pub state: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleVehicle {
    pub plate: Plate,
    pub renavam: Renavam,
    pub state: State,
}

impl SimpleVehicle {
    pub fn from_dto(dto: SimpleVehicleDto) -> Parsed<SimpleVehicle> {
        dto.validate()?;
        let plate = Plate::from_raw(&dto.plate)?;
        let renavam = Renavam::from_raw(&dto.renavam)?;
        let state = State::from_raw(&dto.state)?;
        Ok(SimpleVehicle { plate, renavam, state })
    }

    pub fn to_dto(&self) -> SimpleVehicleDto {
        SimpleVehicleDto {
            plate: self.plate.as_raw().to_string(),
            renavam: self.renavam.as_raw().to_string(),
            state: self.state.as_raw().to_string(),
        }
    }
}
