//! Profile screen: the profile snapshot, an edit dialog, and the purchase
//! history listing.

use std::sync::Arc;

use blockfile_core::domain::{Profile, PurchasedProduct};

use crate::form::FormState;
use crate::pager::PagedList;
use crate::repo::ProfileRepo;

/// Editable profile fields. A blank password means "keep the current one".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileBuffer {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct ProfileState {
    repo: Arc<dyn ProfileRepo>,
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
    pub edit: FormState<ProfileBuffer>,
    pub purchases: PagedList<PurchasedProduct>,
}

impl ProfileState {
    pub fn new(repo: Arc<dyn ProfileRepo>) -> Self {
        Self {
            repo,
            profile: None,
            loading: false,
            error: None,
            edit: FormState::default(),
            purchases: PagedList::new(),
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;
        match self.repo.profile().await {
            Ok(profile) => self.profile = Some(profile),
            Err(error) => self.error = Some(error.message()),
        }
        self.loading = false;
    }

    /// Opens the edit dialog from a fresh snapshot, never from whatever the
    /// screen happened to be showing.
    pub async fn open_edit(&mut self) {
        match self.repo.profile().await {
            Ok(profile) => {
                let buffer = ProfileBuffer {
                    username: profile.username.clone(),
                    email: profile.email.clone(),
                    password: String::new(),
                };
                self.profile = Some(profile);
                self.edit.open_existing(buffer);
            }
            Err(error) => self.error = Some(error.message()),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    pub async fn submit_edit(&mut self) {
        if let Some(buffer) = self.edit.buffer() {
            let blank_username = buffer.username.trim().is_empty();
            let blank_email = buffer.email.trim().is_empty();
            if blank_username {
                self.edit.set_error("El nombre de usuario no puede estar vacío.");
                return;
            }
            if blank_email {
                self.edit.set_error("El correo no puede estar vacío.");
                return;
            }
        }

        let Some(buffer) = self.edit.begin_submit() else {
            return;
        };
        match self
            .repo
            .update_profile(
                buffer.username.trim(),
                buffer.email.trim(),
                buffer.password.trim(),
            )
            .await
        {
            Ok(profile) => {
                self.profile = Some(profile);
                self.edit.submit_ok();
            }
            Err(error) => self.edit.submit_failed(error.message()),
        }
    }

    pub async fn load_purchases(&mut self, page: u32) {
        let repo = Arc::clone(&self.repo);
        self.purchases
            .load(page, |page| async move { repo.purchases(page).await })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use blockfile_core::domain::AdminProfile;
    use blockfile_core::dto::AdminProfileDto;
    use blockfile_core::Page;
    use std::sync::Mutex;

    use crate::error::{ApiError, Result};

    fn profile(username: &str) -> Profile {
        Profile {
            user_id: 3,
            username: username.into(),
            email: "a@b.c".into(),
            balance: "12.50".into(),
            purchase_count: 2,
        }
    }

    struct FakeRepo {
        update_calls: Mutex<Vec<(String, String, String)>>,
        update_result: Mutex<Option<Result<Profile>>>,
    }

    impl FakeRepo {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                update_calls: Mutex::new(Vec::new()),
                update_result: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl ProfileRepo for FakeRepo {
        async fn profile(&self) -> Result<Profile> {
            Ok(profile("ana"))
        }

        async fn update_profile(
            &self,
            username: &str,
            email: &str,
            password: &str,
        ) -> Result<Profile> {
            self.update_calls.lock().unwrap().push((
                username.to_string(),
                email.to_string(),
                password.to_string(),
            ));
            self.update_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(profile(username)))
        }

        async fn purchases(&self, page: u32) -> Result<Page<PurchasedProduct>> {
            Ok(Page {
                items: Vec::new(),
                page,
                total_pages: 1,
            })
        }

        async fn admin_profile(&self, _user_id: i64) -> Result<AdminProfile> {
            unimplemented!()
        }

        async fn update_admin_profile(&self, _dto: &AdminProfileDto) -> Result<AdminProfile> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn open_edit_stages_a_fresh_snapshot_with_blank_password() {
        let mut state = ProfileState::new(FakeRepo::new());

        state.open_edit().await;

        let buffer = state.edit.buffer().unwrap();
        assert_eq!(buffer.username, "ana");
        assert_eq!(buffer.password, "");
    }

    #[tokio::test]
    async fn blank_username_is_rejected_locally() {
        let repo = FakeRepo::new();
        let mut state = ProfileState::new(repo.clone());
        state.open_edit().await;
        state.edit.buffer_mut().unwrap().username = "  ".into();

        state.submit_edit().await;

        assert_eq!(
            state.edit.error(),
            Some("El nombre de usuario no puede estar vacío.")
        );
        assert!(repo.update_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_update_replaces_profile_and_closes() {
        let repo = FakeRepo::new();
        let mut state = ProfileState::new(repo.clone());
        state.open_edit().await;
        state.edit.buffer_mut().unwrap().username = "ana2".into();

        state.submit_edit().await;

        assert!(!state.edit.is_open());
        assert_eq!(state.profile.as_ref().unwrap().username, "ana2");
        let calls = repo.update_calls.lock().unwrap();
        assert_eq!(calls[0].2, "", "blank password forwarded for omission");
    }

    #[tokio::test]
    async fn rejected_update_reopens_with_server_message() {
        let repo = FakeRepo::new();
        *repo.update_result.lock().unwrap() =
            Some(Err(ApiError::rejected("El correo ya está en uso.")));
        let mut state = ProfileState::new(repo);
        state.open_edit().await;

        state.submit_edit().await;

        assert!(state.edit.is_open());
        assert_eq!(state.edit.error(), Some("El correo ya está en uso."));
    }
}
