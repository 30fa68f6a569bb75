//! Product detail screen: the detail snapshot plus its three action flows
//! (comment, rate, purchase) and the file download.
//!
//! Mutations never patch the snapshot locally. A successful comment or
//! rating reloads the detail so counters and averages come from the server;
//! a successful purchase swaps in the re-fetched post-purchase view that the
//! repository already returns. A rejected purchase leaves the snapshot
//! exactly as it was.

use std::path::PathBuf;
use std::sync::Arc;

use crate::repo::{ProductFileRepo, ProductRepo, ProductView};

/// Inline comment composer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentForm {
    pub open: bool,
    pub text: String,
    pub sending: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Star-rating dialog. `selected` is 0 until the user picks a star.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingForm {
    pub open: bool,
    pub selected: i32,
    pub sending: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseState {
    pub buying: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownloadState {
    pub downloading: bool,
    pub last_downloaded: Option<PathBuf>,
    pub error: Option<String>,
}

pub struct ProductDetailState {
    repo: Arc<dyn ProductRepo>,
    files: Arc<dyn ProductFileRepo>,
    product_id: i64,
    pub loading: bool,
    pub error: Option<String>,
    pub view: Option<ProductView>,
    pub comment: CommentForm,
    pub rating: RatingForm,
    pub purchase: PurchaseState,
    pub download: DownloadState,
}

impl ProductDetailState {
    pub fn new(repo: Arc<dyn ProductRepo>, files: Arc<dyn ProductFileRepo>, product_id: i64) -> Self {
        Self {
            repo,
            files,
            product_id,
            loading: false,
            error: None,
            view: None,
            comment: CommentForm::default(),
            rating: RatingForm::default(),
            purchase: PurchaseState::default(),
            download: DownloadState::default(),
        }
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;
        match self.repo.detail(self.product_id).await {
            Ok(view) => self.view = Some(view),
            // A load failure keeps whatever snapshot was already shown.
            Err(error) => self.error = Some(error.message()),
        }
        self.loading = false;
    }

    // ----- comments -----

    pub fn open_comment(&mut self) {
        self.comment = CommentForm {
            open: true,
            ..CommentForm::default()
        };
    }

    pub fn dismiss_comment(&mut self) {
        self.comment = CommentForm::default();
    }

    pub async fn send_comment(&mut self) {
        let text = self.comment.text.trim().to_string();
        if text.is_empty() {
            self.comment.error = Some("El comentario no puede estar vacío.".to_string());
            return;
        }

        self.comment.sending = true;
        self.comment.error = None;
        match self.repo.comment(self.product_id, &text).await {
            Ok(()) => {
                self.comment.sending = false;
                self.comment.open = false;
                self.comment.text.clear();
                self.comment.success = Some("Comentario registrado.".to_string());
                self.load().await;
            }
            Err(error) => {
                self.comment.sending = false;
                self.comment.error = Some(error.message());
            }
        }
    }

    // ----- ratings -----

    pub fn open_rating(&mut self) {
        self.rating = RatingForm {
            open: true,
            ..RatingForm::default()
        };
    }

    pub fn dismiss_rating(&mut self) {
        self.rating = RatingForm::default();
    }

    pub fn select_rating(&mut self, stars: i32) {
        self.rating.selected = stars;
    }

    pub async fn send_rating(&mut self) {
        if !(1..=5).contains(&self.rating.selected) {
            self.rating.error = Some("Selecciona una calificación.".to_string());
            return;
        }

        self.rating.sending = true;
        self.rating.error = None;
        match self.repo.rate(self.product_id, self.rating.selected).await {
            Ok(_average) => {
                self.rating.sending = false;
                self.rating.open = false;
                self.rating.success = Some("Calificación registrada.".to_string());
                self.load().await;
            }
            Err(error) => {
                self.rating.sending = false;
                self.rating.error = Some(error.message());
            }
        }
    }

    // ----- purchase -----

    pub async fn buy(&mut self) {
        self.purchase.buying = true;
        self.purchase.error = None;
        self.purchase.success = None;
        match self.repo.buy(self.product_id).await {
            Ok(view) => {
                self.view = Some(view);
                self.purchase.buying = false;
                self.purchase.success = Some("Compra realizada.".to_string());
            }
            Err(error) => {
                self.purchase.buying = false;
                self.purchase.error = Some(error.message());
            }
        }
    }

    pub fn dismiss_purchase_notice(&mut self) {
        self.purchase.error = None;
        self.purchase.success = None;
    }

    // ----- download -----

    pub async fn download(&mut self) {
        self.download.downloading = true;
        self.download.error = None;
        match self.files.download(self.product_id).await {
            Ok(path) => {
                self.download.downloading = false;
                self.download.last_downloaded = Some(path);
            }
            Err(error) => {
                self.download.downloading = false;
                self.download.error = Some(error.message());
            }
        }
    }
}
