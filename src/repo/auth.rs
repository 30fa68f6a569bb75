//! Login and registration.

use async_trait::async_trait;
use blockfile_core::domain::Session;
use blockfile_core::dto::{LoginRequest, RegisterRequest, SessionDto};

use crate::client::Http;
use crate::error::Result;

#[async_trait]
pub trait AuthRepo: Send + Sync {
    async fn login(&self, name: &str, password: &str) -> Result<Session>;
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<Session>;
}

pub struct HttpAuthRepo {
    http: Http,
}

impl HttpAuthRepo {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AuthRepo for HttpAuthRepo {
    async fn login(&self, name: &str, password: &str) -> Result<Session> {
        let body = LoginRequest {
            nombre: name.to_string(),
            contrasena: password.to_string(),
        };
        let dto: SessionDto = self.http.post_json("apimovil/login/", &body).await?;
        Ok(Session::from(dto))
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        let body = RegisterRequest {
            nombre: name.to_string(),
            correo: email.to_string(),
            contrasena: password.to_string(),
        };
        let dto: SessionDto = self.http.post_json("apimovil/register/", &body).await?;
        Ok(Session::from(dto))
    }
}
