//! Admin category table: filters, edit dialog, and the delete confirmation
//! flow. Deletion stays on the current page; the list may come back shorter.

use std::sync::Arc;

use blockfile_core::domain::AdminCategory;

use crate::form::FormState;
use crate::pager::PagedList;
use crate::repo::{AdminCategoriesRepo, CategoryFilters};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBuffer {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

pub struct AdminCategoriesState {
    repo: Arc<dyn AdminCategoriesRepo>,
    pub filters: CategoryFilters,
    pub list: PagedList<AdminCategory>,
    pub form: FormState<CategoryBuffer>,
    /// Set while the "really delete?" prompt is showing.
    pub delete_target: Option<AdminCategory>,
    pub delete_error: Option<String>,
}

impl AdminCategoriesState {
    pub fn new(repo: Arc<dyn AdminCategoriesRepo>) -> Self {
        Self {
            repo,
            filters: CategoryFilters::default(),
            list: PagedList::new(),
            form: FormState::default(),
            delete_target: None,
            delete_error: None,
        }
    }

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

    pub fn open_new(&mut self) {
        self.form.open_new(CategoryBuffer::default());
    }

    pub fn open_edit(&mut self, category: &AdminCategory) {
        self.form.open_existing(CategoryBuffer {
            id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone(),
        });
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    pub async fn submit(&mut self) {
        if let Some(buffer) = self.form.buffer() {
            if buffer.name.trim().is_empty() {
                self.form.set_error("El nombre no puede estar vacío");
                return;
            }
        }

        let Some(buffer) = self.form.begin_submit() else {
            return;
        };
        match self
            .repo
            .save(buffer.id, buffer.name.trim(), buffer.description.trim())
            .await
        {
            Ok(_id) => {
                self.form.submit_ok();
                self.load_page(self.list.page).await;
            }
            Err(error) => self.form.submit_failed(error.message()),
        }
    }

    // ----- deletion -----

    pub fn request_delete(&mut self, category: AdminCategory) {
        self.delete_target = Some(category);
        self.delete_error = None;
    }

    pub fn dismiss_delete(&mut self) {
        self.delete_target = None;
    }

    pub async fn confirm_delete(&mut self) {
        let Some(target) = self.delete_target.take() else {
            return;
        };
        match self.repo.delete(target.id).await {
            Ok(()) => self.load_page(self.list.page).await,
            Err(error) => self.delete_error = Some(error.message()),
        }
    }
}
