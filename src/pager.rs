//! Generic paginated-list state.
//!
//! Every listing screen (catalog, rankings, purchase history, the three
//! admin tables) owns a [`PagedList`] and drives it the same way: `begin`
//! marks a fetch in flight, `finish` publishes the outcome. The published
//! fields replace each other atomically from the view's perspective; a
//! failed fetch keeps the previously held items visible alongside the error
//! message.
//!
//! `begin`/`finish` carry a monotonic sequence so a slow response can never
//! overwrite state produced by a later request.

use std::future::Future;

use blockfile_core::Page;

use crate::error::ApiError;

/// Ties an in-flight fetch to the request that started it. `page` is the
/// clamped page number to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    seq: u64,
    pub page: u32,
}

/// Observable state for one paginated listing.
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
    applied: u64,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            loading: false,
            error: None,
            issued: 0,
            applied: 0,
        }
    }
}

impl<T> PagedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as started: raises the loading flag, clears the error,
    /// clamps the requested page to `>= 1`.
    pub fn begin(&mut self, page: u32) -> FetchToken {
        self.loading = true;
        self.error = None;
        self.issued += 1;
        FetchToken {
            seq: self.issued,
            page: page.max(1),
        }
    }

    /// Publishes a finished fetch. Returns `false` when the completion was
    /// stale (a later one already landed) and was dropped.
    pub fn finish(&mut self, token: FetchToken, result: Result<Page<T>, ApiError>) -> bool {
        if token.seq <= self.applied {
            return false;
        }
        self.applied = token.seq;
        if self.applied == self.issued {
            self.loading = false;
        }
        match result {
            Ok(page) => {
                self.items = page.items;
                self.page = page.page;
                self.total_pages = page.total_pages;
                self.error = None;
            }
            Err(error) => {
                // Stale-but-valid display: items stay as they were.
                self.error = Some(error.message());
            }
        }
        true
    }

    /// Drives one sequential fetch: begin, await, finish.
    pub async fn load<F, Fut>(&mut self, page: u32, fetch: F) -> bool
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = Result<Page<T>, ApiError>>,
    {
        let token = self.begin(page);
        let result = fetch(token.page).await;
        self.finish(token, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, page: u32, total_pages: u32) -> Page<u32> {
        Page {
            items,
            page,
            total_pages,
        }
    }

    #[test]
    fn begin_clamps_page_to_one() {
        let mut list = PagedList::<u32>::new();
        assert_eq!(list.begin(0).page, 1);
        assert_eq!(list.begin(3).page, 3);
    }

    #[test]
    fn success_replaces_everything_atomically() {
        let mut list = PagedList::new();
        let token = list.begin(2);
        assert!(list.loading);
        assert!(list.finish(token, Ok(page(vec![10, 11], 2, 7))));
        assert!(!list.loading);
        assert_eq!(list.items, vec![10, 11]);
        assert_eq!(list.page, 2);
        assert_eq!(list.total_pages, 7);
        assert_eq!(list.error, None);
    }

    #[test]
    fn failure_keeps_previous_items() {
        let mut list = PagedList::new();
        let token = list.begin(1);
        list.finish(token, Ok(page(vec![1, 2, 3], 1, 2)));

        let token = list.begin(2);
        list.finish(token, Err(ApiError::Transport));
        assert_eq!(list.items, vec![1, 2, 3]);
        assert_eq!(list.page, 1);
        assert_eq!(
            list.error.as_deref(),
            Some(crate::error::CONNECTION_ERROR)
        );
        assert!(!list.loading);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut list = PagedList::new();
        let first = list.begin(1);
        let second = list.begin(2);

        assert!(list.finish(second, Ok(page(vec![20], 2, 5))));
        // The older response arrives late and must not overwrite page 2.
        assert!(!list.finish(first, Ok(page(vec![10], 1, 5))));
        assert_eq!(list.items, vec![20]);
        assert_eq!(list.page, 2);
    }

    #[test]
    fn loading_stays_up_while_newer_fetch_in_flight() {
        let mut list = PagedList::new();
        let first = list.begin(1);
        let _second = list.begin(2);

        list.finish(first, Ok(page(vec![10], 1, 5)));
        assert!(list.loading, "second fetch still pending");
    }

    #[tokio::test]
    async fn load_drives_a_sequential_fetch() {
        let mut list = PagedList::new();
        let applied = list
            .load(0, |page| async move {
                assert_eq!(page, 1, "clamped before the request goes out");
                Ok(Page {
                    items: vec![page],
                    page,
                    total_pages: 1,
                })
            })
            .await;
        assert!(applied);
        assert_eq!(list.items, vec![1]);
    }
}
