//! Public catalog listing.

use async_trait::async_trait;
use blockfile_core::domain::CatalogProduct;
use blockfile_core::dto::{CatalogItemDto, PageDto};
use blockfile_core::Page;

use crate::client::{push_filter, Http};
use crate::error::Result;
use crate::repo::page_from;

/// Raw filter inputs as typed by the user; normalization (trim, omit blanks)
/// happens when the request is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilters {
    pub name: String,
    pub author: String,
    pub category: String,
}

#[async_trait]
pub trait CatalogRepo: Send + Sync {
    async fn page(&self, page: u32, filters: &CatalogFilters) -> Result<Page<CatalogProduct>>;
}

pub struct HttpCatalogRepo {
    http: Http,
}

impl HttpCatalogRepo {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CatalogRepo for HttpCatalogRepo {
    async fn page(&self, page: u32, filters: &CatalogFilters) -> Result<Page<CatalogProduct>> {
        let mut query = vec![("page", page.to_string())];
        push_filter(&mut query, "nombre", &filters.name);
        push_filter(&mut query, "autor", &filters.author);
        push_filter(&mut query, "categoria", &filters.category);

        let dto: PageDto<CatalogItemDto> = self.http.get_json("apimovil/catalogo/", &query).await?;
        page_from(dto)
    }
}
