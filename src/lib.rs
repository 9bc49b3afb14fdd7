// src/lib.rs

//! SDK em Rust para a API de débitos veiculares da Zapay.
//!
//! O fluxo típico: `Zapay::connect` autentica e deixa o token se renovando
//! sozinho; depois é consultar débitos, confirmar, simular parcelas e fechar
//! o checkout com cartão ou PIX. Toda resposta da API passa pela validação
//! de domínio antes de chegar ao chamador.

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod models;
pub mod services;
pub mod usecases;
pub mod zapay;

// Reexports principais
pub use common::error::ZapayError;
pub use common::validation::Parsed;
pub use config::ZapayConfig;
pub use services::transport::{HttpTransport, ReqwestTransport, RequestOptions, RequestResponse};
pub use zapay::Zapay;
