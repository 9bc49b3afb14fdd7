// src/models/card.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{Parsed, RE_CARD_NUMBER, RE_DOCUMENT, RE_EXPIRATION_DATE};
use crate::models::billing_address::{BillingAddress, BillingAddressDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    #[validate(regex(path = *RE_DOCUMENT, message = "O documento precisa ser um CPF ou CNPJ."))]
    pub document: String,

    #[validate(regex(path = *RE_CARD_NUMBER, message = "O número do cartão precisa de ao menos 13 dígitos."))]
    pub number: String,

    #[validate(length(min = 2, message = "A bandeira precisa de ao menos 2 caracteres."))]
    pub brand: String,

    #[validate(length(min = 2, message = "O nome do titular precisa de ao menos 2 caracteres."))]
    pub holder: String,

    // MMAA, como impresso no cartão
    #[validate(regex(path = *RE_EXPIRATION_DATE, message = "A validade precisa dos 4 dígitos."))]
    pub expiration_date: String,

    #[validate(length(min = 2, message = "O cvv precisa de ao menos 2 caracteres."))]
    pub cvv: String,

    #[validate(nested)]
    pub billing_address: BillingAddressDto,
}

/// Cartão validado; o endereço de cobrança é validado junto.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub document: String,
    pub number: String,
    pub brand: String,
    pub holder: String,
    pub expiration_date: String,
    pub cvv: String,
    pub billing_address: BillingAddress,
}

impl Card {
    pub fn from_dto(dto: CardDto) -> Parsed<Card> {
        dto.validate()?;
        Ok(Card {
            document: dto.document,
            number: dto.number,
            brand: dto.brand,
            holder: dto.holder,
            expiration_date: dto.expiration_date,
            cvv: dto.cvv,
            billing_address: dto.billing_address,
        })
    }

    pub fn to_dto(&self) -> CardDto {
        CardDto {
            document: self.document.clone(),
            number: self.number.clone(),
            brand: self.brand.clone(),
            holder: self.holder.clone(),
            expiration_date: self.expiration_date.clone(),
            cvv: self.cvv.clone(),
            billing_address: self.billing_address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CardDto {
        CardDto {
            document: "12345678901".to_string(),
            number: "4111111111111111".to_string(),
            brand: "visa".to_string(),
            holder: "JOSE M SILVA".to_string(),
            expiration_date: "1229".to_string(),
            cvv: "123".to_string(),
            billing_address: BillingAddressDto {
                zip_code: Some("30140071".to_string()),
                address: Some("Av. Afonso Pena".to_string()),
                neighborhood: Some("Centro".to_string()),
                city: Some("Belo Horizonte".to_string()),
                number: Some("1500".to_string()),
            },
        }
    }

    #[test]
    fn valid_card_round_trips() {
        let original = dto();
        let card = Card::from_dto(original.clone()).unwrap();
        assert_eq!(card.to_dto(), original);
    }

    #[test]
    fn cnpj_documents_are_accepted() {
        let mut raw = dto();
        raw.document = "12345678000199".to_string();
        assert!(Card::from_dto(raw).is_ok());
    }

    #[test]
    fn short_card_number_is_rejected() {
        let mut bad = dto();
        bad.number = "411111111111".to_string();
        let failure = Card::from_dto(bad).unwrap_err();
        assert!(failure.field_errors().contains_key("number"));
    }

    #[test]
    fn nested_billing_address_failures_propagate() {
        let mut bad = dto();
        bad.billing_address.zip_code = Some("301".to_string());
        assert!(Card::from_dto(bad).is_err());
    }
}
