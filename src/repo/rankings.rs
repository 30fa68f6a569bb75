//! The three ranking listings. Page-only pagination, no filters.

use async_trait::async_trait;
use blockfile_core::domain::{BestRated, MostPurchased, TopBuyer};
use blockfile_core::dto::{BestRatedDto, MostPurchasedDto, PageDto, TopBuyerDto};
use blockfile_core::Page;

use crate::client::Http;
use crate::error::Result;
use crate::repo::page_from;

#[async_trait]
pub trait RankingsRepo: Send + Sync {
    async fn most_purchased(&self, page: u32) -> Result<Page<MostPurchased>>;
    async fn top_buyers(&self, page: u32) -> Result<Page<TopBuyer>>;
    async fn best_rated(&self, page: u32) -> Result<Page<BestRated>>;
}

pub struct HttpRankingsRepo {
    http: Http,
}

impl HttpRankingsRepo {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RankingsRepo for HttpRankingsRepo {
    async fn most_purchased(&self, page: u32) -> Result<Page<MostPurchased>> {
        let dto: PageDto<MostPurchasedDto> = self
            .http
            .get_json(
                "apimovil/rankings/productos-mas-comprados/",
                &[("page", page.to_string())],
            )
            .await?;
        page_from(dto)
    }

    async fn top_buyers(&self, page: u32) -> Result<Page<TopBuyer>> {
        let dto: PageDto<TopBuyerDto> = self
            .http
            .get_json(
                "apimovil/rankings/mejores-compradores/",
                &[("page", page.to_string())],
            )
            .await?;
        page_from(dto)
    }

    async fn best_rated(&self, page: u32) -> Result<Page<BestRated>> {
        let dto: PageDto<BestRatedDto> = self
            .http
            .get_json(
                "apimovil/rankings/productos-mejor-calificados/",
                &[("page", page.to_string())],
            )
            .await?;
        page_from(dto)
    }
}
