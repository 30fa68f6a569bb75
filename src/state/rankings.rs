//! Rankings screen: three independent listings behind one holder.

use std::sync::Arc;

use blockfile_core::domain::{BestRated, MostPurchased, TopBuyer};

use crate::pager::PagedList;
use crate::repo::RankingsRepo;

pub struct RankingsState {
    repo: Arc<dyn RankingsRepo>,
    pub most_purchased: PagedList<MostPurchased>,
    pub top_buyers: PagedList<TopBuyer>,
    pub best_rated: PagedList<BestRated>,
}

impl RankingsState {
    pub fn new(repo: Arc<dyn RankingsRepo>) -> Self {
        Self {
            repo,
            most_purchased: PagedList::new(),
            top_buyers: PagedList::new(),
            best_rated: PagedList::new(),
        }
    }

    pub async fn load_most_purchased(&mut self, page: u32) {
        let repo = Arc::clone(&self.repo);
        self.most_purchased
            .load(page, |page| async move { repo.most_purchased(page).await })
            .await;
    }

    pub async fn load_top_buyers(&mut self, page: u32) {
        let repo = Arc::clone(&self.repo);
        self.top_buyers
            .load(page, |page| async move { repo.top_buyers(page).await })
            .await;
    }

    pub async fn load_best_rated(&mut self, page: u32) {
        let repo = Arc::clone(&self.repo);
        self.best_rated
            .load(page, |page| async move { repo.best_rated(page).await })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use blockfile_core::Page;

    use crate::error::{ApiError, Result};

    struct FakeRepo;

    #[async_trait]
    impl RankingsRepo for FakeRepo {
        async fn most_purchased(&self, page: u32) -> Result<Page<MostPurchased>> {
            Ok(Page {
                items: vec![MostPurchased {
                    id: 1,
                    top: 1,
                    name: "n".into(),
                    author: "a".into(),
                    category: "c".into(),
                    price: Some(2.0),
                    purchases: 9,
                }],
                page,
                total_pages: 3,
            })
        }

        async fn top_buyers(&self, _page: u32) -> Result<Page<TopBuyer>> {
            Err(ApiError::Transport)
        }

        async fn best_rated(&self, page: u32) -> Result<Page<BestRated>> {
            Ok(Page {
                items: Vec::new(),
                page,
                total_pages: 1,
            })
        }
    }

    #[tokio::test]
    async fn listings_do_not_share_state() {
        let mut state = RankingsState::new(Arc::new(FakeRepo));

        state.load_most_purchased(2).await;
        state.load_top_buyers(1).await;

        assert_eq!(state.most_purchased.items.len(), 1);
        assert_eq!(state.most_purchased.page, 2);
        assert_eq!(state.most_purchased.error, None);

        assert!(state.top_buyers.items.is_empty());
        assert_eq!(
            state.top_buyers.error.as_deref(),
            Some(crate::error::CONNECTION_ERROR)
        );

        assert!(!state.best_rated.loading, "untouched listing stays idle");
    }
}
