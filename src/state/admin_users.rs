//! Admin user table. The edit dialog is populated from a fresh detail fetch
//! and only the balance is sent back.

use std::sync::Arc;

use blockfile_core::domain::AdminUser;

use crate::form::FormState;
use crate::pager::PagedList;
use crate::repo::{AdminUsersRepo, UserFilters};

/// Staged user edit. `name` is display-only context for the dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserBuffer {
    pub id: i64,
    pub name: String,
    pub balance: String,
}

pub struct AdminUsersState {
    repo: Arc<dyn AdminUsersRepo>,
    pub filters: UserFilters,
    pub list: PagedList<AdminUser>,
    pub form: FormState<UserBuffer>,
    pub delete_target: Option<AdminUser>,
    pub delete_error: Option<String>,
}

impl AdminUsersState {
    pub fn new(repo: Arc<dyn AdminUsersRepo>) -> Self {
        Self {
            repo,
            filters: UserFilters::default(),
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

    pub async fn open_edit(&mut self, user_id: i64) {
        match self.repo.detail(user_id).await {
            Ok(detail) => self.form.open_existing(UserBuffer {
                id: detail.id,
                name: detail.name,
                balance: detail.balance.unwrap_or_default(),
            }),
            Err(error) => {
                self.list.error = Some(error.message());
            }
        }
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    pub async fn submit(&mut self) {
        if let Some(buffer) = self.form.buffer() {
            if buffer.balance.trim().parse::<f64>().is_err() {
                self.form.set_error("El saldo no es válido");
                return;
            }
        }

        let Some(buffer) = self.form.begin_submit() else {
            return;
        };
        match self
            .repo
            .save_balance(buffer.id, buffer.balance.trim())
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

    pub fn request_delete(&mut self, user: AdminUser) {
        self.delete_target = Some(user);
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
