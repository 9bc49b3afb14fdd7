// src/usecases/authentication.rs

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::common::error::ZapayError;
use crate::common::jwt;
use crate::models::token::Token;
use crate::services::zapay_service::ZapayService;

/// Guarda o token corrente. As operações leem de forma síncrona no momento
/// da chamada; só a tarefa de refresh escreve.
#[derive(Clone, Default)]
pub struct TokenCell {
    inner: Arc<RwLock<Option<Token>>>,
}

impl TokenCell {
    pub fn get(&self) -> Result<Token, ZapayError> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .ok_or(ZapayError::MissingToken)
    }

    fn set(&self, token: Token) {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(token);
    }
}

/// Autentica na API e mantém o token renovado até o `shutdown`.
pub struct AuthenticationUseCase {
    service: Arc<ZapayService>,
    username: String,
    password: String,
    tokens: TokenCell,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
}

impl AuthenticationUseCase {
    pub fn new(
        service: Arc<ZapayService>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            service,
            username: username.into(),
            password: password.into(),
            tokens: TokenCell::default(),
            refresh_task: Mutex::new(None),
        }
    }

    pub fn tokens(&self) -> TokenCell {
        self.tokens.clone()
    }

    async fn refresh_once(
        service: &ZapayService,
        username: &str,
        password: &str,
        tokens: &TokenCell,
    ) -> Result<Duration, ZapayError> {
        let token = service.authentication(username, password).await?;
        let claims = jwt::decode_claims(token.as_raw())?;
        tokens.set(token);
        Ok(jwt::next_refresh_delay(&claims))
    }

    /// Autentica agora e agenda as renovações seguintes.
    pub async fn authenticate(&self) -> Result<(), ZapayError> {
        let delay =
            Self::refresh_once(&self.service, &self.username, &self.password, &self.tokens).await?;
        tracing::info!("✅ Autenticado na Zapay; próximo refresh em {:?}", delay);
        self.arm_refresh(delay);
        Ok(())
    }

    // Existe no máximo uma renovação pendente: rearmar substitui e cancela
    // a anterior. A tarefa só continua depois de um refresh bem-sucedido.
    fn arm_refresh(&self, first_delay: Duration) {
        let service = Arc::clone(&self.service);
        let username = self.username.clone();
        let password = self.password.clone();
        let tokens = self.tokens.clone();
        let handle = tokio::spawn(async move {
            let mut delay = first_delay;
            loop {
                tokio::time::sleep(delay).await;
                match Self::refresh_once(&service, &username, &password, &tokens).await {
                    Ok(next_delay) => {
                        tracing::info!("✅ Token renovado; próximo refresh em {:?}", next_delay);
                        delay = next_delay;
                    }
                    Err(err) => {
                        tracing::error!("🔥 Falha ao renovar o token: {}", err);
                        break;
                    }
                }
            }
        });
        let mut slot = self.refresh_task.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Cancela a renovação pendente. Idempotente: chamadas seguintes não
    /// têm efeito.
    pub fn shutdown(&self) {
        let mut slot = self.refresh_task.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(task) = slot.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_reports_missing_token() {
        let cell = TokenCell::default();
        assert!(matches!(cell.get(), Err(ZapayError::MissingToken)));
    }

    #[test]
    fn cell_returns_the_latest_token() {
        let cell = TokenCell::default();
        cell.set(Token::from_raw("a.b.c").unwrap());
        cell.set(Token::from_raw("d.e.f").unwrap());
        assert_eq!(cell.get().unwrap().as_raw(), "d.e.f");
    }
}
