//! Client library for the BlockFile digital-goods storefront.
//!
//! The backend owns all business rules; this crate is a thin, typed client
//! over its JSON API plus the per-screen state each frontend surface needs.
//! It is organized in three layers:
//!
//! * [`client`] holds the shared [`Http`] transport and its session cookie
//!   store; every failure is normalized into [`ApiError`].
//! * [`repo`] exposes one trait per feature area (catalog, product actions,
//!   rankings, profile, the admin tables) with an HTTP implementation each.
//! * [`state`] holds the per-screen state machines: paginated listings,
//!   edit-dialog buffers, and the comment/rating/purchase flows.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use blockfile::repo::{CatalogRepo, HttpCatalogRepo};
//! use blockfile::state::CatalogState;
//! use blockfile::Http;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let http = Http::new("https://blockfile.up.railway.app")?;
//! let repo: Arc<dyn CatalogRepo> = Arc::new(HttpCatalogRepo::new(http));
//! let mut catalog = CatalogState::new(repo);
//! catalog.filters.name = "algebra".to_string();
//! catalog.search().await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod pager;
pub mod repo;
pub mod session;
pub mod state;

pub use client::Http;
pub use config::Config;
pub use error::{ApiError, Result};
pub use form::FormState;
pub use pager::PagedList;
pub use session::{InMemorySessionStore, SessionStore};
