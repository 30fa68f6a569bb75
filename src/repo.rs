//! Repositories: one per feature area.
//!
//! Each repository is an `async_trait` with an HTTP-backed implementation.
//! Repositories translate wire DTOs into domain records, enforce the `ok`
//! envelope of business responses, and surface every failure as an
//! [`ApiError`](crate::error::ApiError); nothing reqwest-specific leaks out.

use blockfile_core::dto::PageDto;
use blockfile_core::Page;

use crate::error::{ApiError, Result};

pub mod admin_categories;
pub mod admin_products;
pub mod admin_users;
pub mod auth;
pub mod catalog;
pub mod files;
pub mod product;
pub mod profile;
pub mod rankings;

pub use admin_categories::{AdminCategoriesRepo, CategoryFilters, HttpAdminCategoriesRepo};
pub use admin_products::{AdminProductsRepo, HttpAdminProductsRepo, ProductFilters};
pub use admin_users::{AdminUsersRepo, HttpAdminUsersRepo, UserFilters};
pub use auth::{AuthRepo, HttpAuthRepo};
pub use catalog::{CatalogFilters, CatalogRepo, HttpCatalogRepo};
pub use files::{HttpProductFileRepo, ProductFileRepo};
pub use product::{HttpProductRepo, ProductRepo, ProductView};
pub use profile::{HttpProfileRepo, ProfileRepo};
pub use rankings::{HttpRankingsRepo, RankingsRepo};

/// Maps a paginated wire envelope into a domain page, rejecting `ok=false`.
pub(crate) fn page_from<D, T: From<D>>(dto: PageDto<D>) -> Result<Page<T>> {
    if !dto.ok {
        return Err(ApiError::rejected("Respuesta no válida del servidor"));
    }
    Ok(Page {
        items: dto.rows.into_iter().map(T::from).collect(),
        page: dto.page,
        total_pages: dto.total_pages,
    })
}

/// Enforces the `{ok, message?}` envelope of simple mutations, using
/// `fallback` when the server rejected without a message.
pub(crate) fn expect_ok(
    dto: blockfile_core::dto::SimpleResponseDto,
    fallback: &str,
) -> Result<()> {
    if dto.ok {
        Ok(())
    } else {
        Err(ApiError::rejected(
            dto.message.unwrap_or_else(|| fallback.to_string()),
        ))
    }
}
