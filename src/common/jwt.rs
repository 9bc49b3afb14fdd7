// src/common/jwt.rs

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;

use crate::common::error::ZapayError;

/// Margem de segurança antes do vencimento do token.
const THRESHOLD: i64 = 60 * 1000;

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    pub exp: i64, // Expiration time (quando o token expira), em segundos
    pub iat: i64, // Issued At (quando o token foi criado), em segundos
}

/// Decodifica as claims de um token emitido pela Zapay.
///
/// A assinatura não é verificada: o segredo pertence à API remota. Só nos
/// interessam os instantes de emissão e expiração para agendar o refresh.
pub fn decode_claims(token: &str) -> Result<Claims, ZapayError> {
    let header = decode_header(token)?;
    let mut validation = Validation::new(header.alg);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

/// Quanto esperar até a próxima autenticação: o tempo restante do token
/// menos a margem de segurança, nunca menos que 1ms.
pub fn next_refresh_delay(claims: &Claims) -> Duration {
    let expiration_ms = claims.exp * 1000;
    let now_ms = Utc::now().timestamp_millis();
    let delay_ms = expiration_ms - now_ms - THRESHOLD;
    Duration::from_millis(delay_ms.max(1) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_claims_collapse_to_the_minimum_delay() {
        let claims = Claims { exp: 0, iat: 0 };
        assert_eq!(next_refresh_delay(&claims), Duration::from_millis(1));
    }

    #[test]
    fn future_claims_keep_the_safety_margin() {
        let now = Utc::now().timestamp();
        let claims = Claims { exp: now + 3600, iat: now };
        let delay = next_refresh_delay(&claims);
        assert!(delay > Duration::from_secs(3600 - 70));
        assert!(delay < Duration::from_secs(3600 - 50));
    }
}
