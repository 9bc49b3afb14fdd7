// src/models/token.rs

use crate::common::validation::{Parsed, RE_TOKEN, field_error, single_field_failure};

/// Credencial bearer devolvida pela autenticação.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn from_raw(maybe_token: &str) -> Parsed<Token> {
        if RE_TOKEN.is_match(maybe_token) {
            return Ok(Token(maybe_token.to_string()));
        }
        Err(single_field_failure(
            "token",
            field_error("token", maybe_token, "não é um token válido"),
        ))
    }

    pub fn as_raw(&self) -> &str {
        &self.0
    }
}
