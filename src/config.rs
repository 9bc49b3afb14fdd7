// src/config.rs

use std::env;

/// URL do ambiente de sandbox, usada quando nada é configurado.
pub const DEFAULT_BASE_URL: &str = "https://api.sandbox.usezapay.com.br";

// As credenciais e a URL base da integração
#[derive(Debug, Clone)]
pub struct ZapayConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl ZapayConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    // Carrega as configurações do ambiente (e de um .env, quando existir)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("ZAPAY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let username = env::var("ZAPAY_USERNAME")
            .map_err(|_| anyhow::anyhow!("ZAPAY_USERNAME deve ser definida"))?;
        let password = env::var("ZAPAY_PASSWORD")
            .map_err(|_| anyhow::anyhow!("ZAPAY_PASSWORD deve ser definida"))?;

        tracing::info!("✅ Configuração da Zapay carregada (base_url = {})", base_url);

        Ok(Self { base_url, username, password })
    }
}
