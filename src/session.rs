//! In-memory session cookie storage.
//!
//! The backend uses cookie-based sessions; the client keeps the most recent
//! cookie set per destination host for the lifetime of the process and
//! attaches it to every outgoing request. No disk persistence, no expiry
//! bookkeeping. "Logout" is purely a client-side reset.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use reqwest::header::HeaderValue;
use reqwest::Url;

/// Per-host cookie storage. Implementations must tolerate concurrent access;
/// each host's list is replaced wholesale, never merged.
pub trait SessionStore: Send + Sync {
    /// `name=value` pairs currently stored for `host`.
    fn cookies_for(&self, host: &str) -> Vec<String>;

    /// Replaces the stored cookie set for `host`.
    fn store(&self, host: &str, cookies: Vec<String>);

    /// Drops all stored sessions (client-side logout).
    fn clear(&self);
}

/// Process-lifetime cookie store keyed by host.
#[derive(Default)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn cookies_for(&self, host: &str) -> Vec<String> {
        self.inner
            .read()
            .ok()
            .and_then(|map| map.get(host).cloned())
            .unwrap_or_default()
    }

    fn store(&self, host: &str, cookies: Vec<String>) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(host.to_string(), cookies);
        }
    }

    fn clear(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }
}

/// Adapter wiring a [`SessionStore`] into reqwest's cookie machinery.
pub(crate) struct SessionJar(pub Arc<dyn SessionStore>);

impl reqwest::cookie::CookieStore for SessionJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let Some(host) = url.host_str() else { return };

        // Keep only the name=value segment of each Set-Cookie header; the
        // attributes (Path, HttpOnly, ...) are not re-sent by clients.
        let cookies: Vec<String> = cookie_headers
            .filter_map(|value| value.to_str().ok())
            .filter_map(|raw| raw.split(';').next())
            .map(|pair| pair.trim().to_string())
            .filter(|pair| pair.contains('='))
            .collect();

        if !cookies.is_empty() {
            self.0.store(host, cookies);
        }
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let host = url.host_str()?;
        let pairs = self.0.cookies_for(host);
        if pairs.is_empty() {
            return None;
        }
        HeaderValue::from_str(&pairs.join("; ")).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::cookie::CookieStore as _;

    #[test]
    fn stores_and_replays_per_host() {
        let store = InMemorySessionStore::new();
        store.store("a.example", vec!["sessionid=abc".into()]);
        store.store("b.example", vec!["sessionid=xyz".into()]);

        assert_eq!(store.cookies_for("a.example"), vec!["sessionid=abc"]);
        assert_eq!(store.cookies_for("b.example"), vec!["sessionid=xyz"]);
        assert!(store.cookies_for("c.example").is_empty());
    }

    #[test]
    fn replaces_wholesale_on_new_response() {
        let store = InMemorySessionStore::new();
        store.store("a.example", vec!["sessionid=old".into(), "csrftoken=1".into()]);
        store.store("a.example", vec!["sessionid=new".into()]);
        assert_eq!(store.cookies_for("a.example"), vec!["sessionid=new"]);
    }

    #[test]
    fn jar_strips_attributes_and_joins_pairs() {
        let jar = SessionJar(Arc::new(InMemorySessionStore::new()));
        let url = Url::parse("http://shop.example/apimovil/login/").unwrap();

        let headers = [
            HeaderValue::from_static("sessionid=abc; Path=/; HttpOnly"),
            HeaderValue::from_static("csrftoken=42; Secure"),
        ];
        jar.set_cookies(&mut headers.iter(), &url);

        let replay = jar.cookies(&url).unwrap();
        assert_eq!(replay.to_str().unwrap(), "sessionid=abc; csrftoken=42");
    }

    #[test]
    fn clear_forgets_every_host() {
        let store = InMemorySessionStore::new();
        store.store("a.example", vec!["sessionid=abc".into()]);
        store.clear();
        assert!(store.cookies_for("a.example").is_empty());
    }
}
