//! Low-level HTTP client for the BlockFile backend.
//!
//! One [`Http`] instance is shared by every repository. It owns the base
//! URL, the reqwest client wired to the session cookie store, and the
//! normalization of every transport/HTTP failure into [`ApiError`].

use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::{multipart, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::session::{InMemorySessionStore, SessionJar, SessionStore};

/// Shared HTTP client with session-cookie support.
#[derive(Clone)]
pub struct Http {
    base: Url,
    client: reqwest::Client,
    session: Arc<dyn SessionStore>,
}

impl Http {
    /// Builds a client with a fresh in-memory session store.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_session(base_url, Arc::new(InMemorySessionStore::new()))
    }

    /// Builds a client around an injected session store.
    pub fn with_session(base_url: &str, session: Arc<dyn SessionStore>) -> anyhow::Result<Self> {
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base = Url::parse(&base)?;

        let client = reqwest::Client::builder()
            .cookie_provider(Arc::new(SessionJar(Arc::clone(&session))))
            .build()?;

        Ok(Self {
            base,
            client,
            session,
        })
    }

    /// The session store this client replays cookies from.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Drops every stored session cookie (client-side logout; the backend
    /// has no logout endpoint).
    pub fn reset_session(&self) {
        self.session.clear();
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|_| {
            ApiError::rejected(format!("Ruta inválida: {path}"))
        })
    }

    /// GET returning JSON. `query` entries are sent as-is; filter
    /// normalization happens before this point (see [`opt_filter`]).
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!(path, "GET");
        let response = self
            .client
            .get(self.url(path)?)
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// POST with a JSON body, returning JSON.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path)?)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// POST with a form-urlencoded body, returning JSON.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, String)],
    ) -> Result<T> {
        debug!(path, "POST (form)");
        let response = self
            .client
            .post(self.url(path)?)
            .form(fields)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// POST with a multipart body, returning JSON.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<T> {
        debug!(path, "POST (multipart)");
        let response = self
            .client
            .post(self.url(path)?)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// GET returning the raw body plus the `Content-Disposition` header,
    /// used for file downloads.
    pub async fn get_bytes(&self, path: &str) -> Result<(Bytes, Option<String>)> {
        debug!(path, "GET (bytes)");
        let response = self
            .client
            .get(self.url(path)?)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let body = response.bytes().await.map_err(transport)?;
        Ok((body, disposition))
    }
}

fn transport(error: reqwest::Error) -> ApiError {
    debug!(%error, "request failed");
    ApiError::Transport
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        return Err(ApiError::from_response(status.as_u16(), &body));
    }

    response.json::<T>().await.map_err(|error| {
        debug!(%error, "bad response body");
        ApiError::Rejected {
            status: Some(status.as_u16()),
            message: "Respuesta no válida del servidor".into(),
        }
    })
}

/// A text filter is unset when it trims to empty; unset filters are omitted
/// from the request so the server default applies.
pub fn opt_filter(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A numeric filter that fails to parse is treated as unset, not as a local
/// validation error.
pub fn opt_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Appends a text filter to an outgoing query when it is set.
pub fn push_filter(query: &mut Vec<(&'static str, String)>, key: &'static str, raw: &str) {
    if let Some(value) = opt_filter(raw) {
        query.push((key, value));
    }
}

/// Appends a numeric filter to an outgoing query when it parses.
pub fn push_id_filter(query: &mut Vec<(&'static str, String)>, key: &'static str, raw: &str) {
    if let Some(value) = opt_id(raw) {
        query.push((key, value.to_string()));
    }
}
