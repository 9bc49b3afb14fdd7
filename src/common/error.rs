use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
//
// Falhas de validação são recuperáveis: o chamador pode inspecionar os
// campos e devolver ao usuário. As demais variantes encerram a operação,
// já que a biblioteca não tem caminho alternativo quando a API ou o
// transporte falham.
#[derive(Debug, Error)]
pub enum ZapayError {
    #[error("Erro de validação")]
    Validation(#[from] validator::ValidationErrors),

    // Status diferente de 200. Para 4xx a API devolve `{detail, error}`;
    // qualquer outra coisa vira a mensagem genérica.
    #[error("{error}: {detail}")]
    Api { error: String, detail: String },

    #[error("Falha no transporte HTTP")]
    Transport(#[from] reqwest::Error),

    // A resposta veio com status 200 mas fora do contrato combinado.
    #[error("Resposta fora do contrato da API")]
    Contract(#[from] serde_json::Error),

    #[error("Nenhum token disponível; autentique antes de chamar a operação")]
    MissingToken,

    #[error("Erro de JWT: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno")]
    Internal(#[from] anyhow::Error),
}

impl ZapayError {
    /// Mensagem genérica usada quando a API falha sem um corpo de erro legível.
    pub fn unknown_api_failure() -> Self {
        ZapayError::Api {
            error: "Erro Desconhecido".to_string(),
            detail: "Não foi possível completar a request".to_string(),
        }
    }
}
