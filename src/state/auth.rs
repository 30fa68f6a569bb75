//! Login / registration screen. On logout the shared cookie store is
//! cleared so no later request can ride the old session.

use std::sync::Arc;

use blockfile_core::domain::Session;
use tracing::info;

use crate::client::Http;
use crate::repo::AuthRepo;

pub struct AuthState {
    repo: Arc<dyn AuthRepo>,
    http: Http,
    pub name: String,
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
    pub session: Option<Session>,
}

impl AuthState {
    pub fn new(repo: Arc<dyn AuthRepo>, http: Http) -> Self {
        Self {
            repo,
            http,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            loading: false,
            error: None,
            session: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub async fn login(&mut self) {
        if self.name.trim().is_empty() || self.password.is_empty() {
            self.error = Some("Completa usuario y contraseña.".to_string());
            return;
        }

        self.loading = true;
        self.error = None;
        match self.repo.login(self.name.trim(), &self.password).await {
            Ok(session) => {
                info!(user = %session.username, "logged in");
                self.session = Some(session);
                self.password.clear();
            }
            Err(error) => self.error = Some(error.message()),
        }
        self.loading = false;
    }

    pub async fn register(&mut self) {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            self.error = Some("Completa todos los campos.".to_string());
            return;
        }

        self.loading = true;
        self.error = None;
        match self
            .repo
            .register(self.name.trim(), self.email.trim(), &self.password)
            .await
        {
            Ok(session) => {
                info!(user = %session.username, "registered");
                self.session = Some(session);
                self.password.clear();
            }
            Err(error) => self.error = Some(error.message()),
        }
        self.loading = false;
    }

    pub fn logout(&mut self) {
        self.session = None;
        self.http.reset_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::error::{ApiError, Result};
    use crate::session::SessionStore;

    fn session(name: &str) -> Session {
        Session {
            user_id: 1,
            username: name.into(),
            email: "a@b.c".into(),
            balance: "0.00".into(),
            former_client: false,
            role: None,
        }
    }

    struct FakeRepo {
        login_result: Mutex<Option<Result<Session>>>,
    }

    impl FakeRepo {
        fn returning(result: Result<Session>) -> Arc<Self> {
            Arc::new(Self {
                login_result: Mutex::new(Some(result)),
            })
        }
    }

    #[async_trait]
    impl AuthRepo for FakeRepo {
        async fn login(&self, name: &str, _password: &str) -> Result<Session> {
            self.login_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(session(name)))
        }

        async fn register(&self, name: &str, _email: &str, _password: &str) -> Result<Session> {
            Ok(session(name))
        }
    }

    fn http() -> Http {
        Http::new("http://127.0.0.1:9/").unwrap()
    }

    #[tokio::test]
    async fn empty_credentials_short_circuit() {
        let repo = FakeRepo::returning(Ok(session("x")));
        let mut state = AuthState::new(repo, http());

        state.login().await;

        assert_eq!(
            state.error.as_deref(),
            Some("Completa usuario y contraseña.")
        );
        assert!(state.session.is_none());
    }

    #[tokio::test]
    async fn login_stores_session_and_drops_the_password() {
        let repo = FakeRepo::returning(Ok(session("ana")));
        let mut state = AuthState::new(repo, http());
        state.name = "ana".into();
        state.password = "secreta".into();

        state.login().await;

        assert!(state.is_logged_in());
        assert_eq!(state.password, "");
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn rejected_login_surfaces_the_server_message() {
        let repo = FakeRepo::returning(Err(ApiError::rejected("Credenciales inválidas")));
        let mut state = AuthState::new(repo, http());
        state.name = "ana".into();
        state.password = "mala".into();

        state.login().await;

        assert_eq!(state.error.as_deref(), Some("Credenciales inválidas"));
        assert!(!state.is_logged_in());
    }

    #[tokio::test]
    async fn logout_clears_session_and_cookies() {
        let http = http();
        http.session()
            .store("example.com", vec!["sessionid=abc".to_string()]);

        let repo = FakeRepo::returning(Ok(session("ana")));
        let mut state = AuthState::new(repo, http.clone());
        state.name = "ana".into();
        state.password = "secreta".into();
        state.login().await;

        state.logout();

        assert!(!state.is_logged_in());
        assert!(http.session().cookies_for("example.com").is_empty());
    }
}
