//! Shared types for the BlockFile storefront client.
//!
//! This crate provides the data shapes exchanged with the BlockFile backend
//! and the domain records the UI layer consumes.
//!
//! # Overview
//!
//! - [`Page`] - one fetched slice of a server-side paginated list
//! - [`dto`] - wire DTOs, field-for-field what the backend sends (Spanish
//!   field names are part of the fixed REST contract)
//! - [`domain`] - UI-facing records mapped from the DTOs
//!
//! # Example
//!
//! Decoding a catalog page response:
//!
//! ```
//! use blockfile_core::dto::{CatalogItemDto, PageDto};
//!
//! let body = r#"{
//!     "ok": true,
//!     "rows": [{"id": 7, "nombre": "Algebra", "autor": "Lang", "precio": 12.5}],
//!     "page": 1,
//!     "total_pages": 5
//! }"#;
//!
//! let page: PageDto<CatalogItemDto> = serde_json::from_str(body).unwrap();
//! assert!(page.ok);
//! assert_eq!(page.rows.len(), 1);
//! assert_eq!(page.total_pages, 5);
//! ```

use serde::{Deserialize, Serialize};

pub mod domain;
pub mod dto;

/// One page of a server-side paginated listing.
///
/// The backend owns pagination entirely; the client only ever holds the slice
/// it was given, wholesale-replaced on every fetch. An empty `items` list is
/// a legal page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// An empty first page, the initial state of every listing.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
        }
    }

    /// True when this is the last page (or pagination is degenerate).
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
