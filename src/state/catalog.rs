//! Catalog screen: filterable, paginated product listing.

use std::sync::Arc;

use blockfile_core::domain::CatalogProduct;

use crate::pager::PagedList;
use crate::repo::{CatalogFilters, CatalogRepo};

pub struct CatalogState {
    repo: Arc<dyn CatalogRepo>,
    /// Filter inputs as typed; normalization happens at request time.
    pub filters: CatalogFilters,
    pub list: PagedList<CatalogProduct>,
}

impl CatalogState {
    pub fn new(repo: Arc<dyn CatalogRepo>) -> Self {
        Self {
            repo,
            filters: CatalogFilters::default(),
            list: PagedList::new(),
        }
    }

    /// A new search always restarts at page 1.
    pub async fn search(&mut self) {
        self.load_page(1).await;
    }

    pub async fn go_to_page(&mut self, page: u32) {
        self.load_page(page).await;
    }

    async fn load_page(&mut self, page: u32) {
        let token = self.list.begin(page);
        let result = self.repo.page(token.page, &self.filters).await;
        self.list.finish(token, result);
    }
}
