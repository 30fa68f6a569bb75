//! Admin product table: filters, the edit dialog, and image management.
//!
//! Every attachment mutation (file, image add, reorder, delete) is followed
//! by a detail re-fetch so the dialog always shows server-assigned state.
//! Image lists are kept sorted ascending by order slot.

use std::sync::Arc;

use blockfile_core::domain::{AdminProduct, AdminProductDetail, ProductImage};

use crate::client::opt_id;
use crate::form::FormState;
use crate::pager::PagedList;
use crate::repo::{AdminProductsRepo, ProductFilters};

/// Staged copy of a product's editable fields. `author_id` and
/// `category_id` stay raw text until submit; unparseable input is sent as
/// unset, matching how filters behave.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductBuffer {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub version: String,
    pub price: String,
    pub author_id: String,
    pub category_id: String,
    pub active: bool,
    pub has_file: bool,
    pub images: Vec<ProductImage>,
}

impl ProductBuffer {
    fn from_detail(detail: AdminProductDetail) -> Self {
        let mut images = detail.images;
        images.sort_by_key(|image| image.order);
        Self {
            id: detail.id,
            name: detail.name,
            description: detail.description,
            version: detail.version,
            price: detail.price,
            author_id: detail
                .author_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            category_id: detail
                .category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            active: detail.active,
            has_file: detail.has_file,
            images,
        }
    }

    fn to_detail(&self) -> AdminProductDetail {
        AdminProductDetail {
            id: self.id,
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            version: self.version.clone(),
            price: self.price.trim().to_string(),
            author_id: opt_id(&self.author_id),
            category_id: opt_id(&self.category_id),
            active: self.active,
            has_file: self.has_file,
            images: self.images.clone(),
        }
    }
}

pub struct AdminProductsState {
    repo: Arc<dyn AdminProductsRepo>,
    pub filters: ProductFilters,
    pub list: PagedList<AdminProduct>,
    pub form: FormState<ProductBuffer>,
}

impl AdminProductsState {
    pub fn new(repo: Arc<dyn AdminProductsRepo>) -> Self {
        Self {
            repo,
            filters: ProductFilters::default(),
            list: PagedList::new(),
            form: FormState::default(),
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
        self.form.open_new(ProductBuffer {
            active: true,
            ..ProductBuffer::default()
        });
    }

    /// Fetches a fresh detail for the edit dialog; list-row fields are never
    /// used as edit defaults.
    pub async fn open_edit(&mut self, product_id: i64) {
        match self.repo.detail(product_id).await {
            Ok(detail) => self.form.open_existing(ProductBuffer::from_detail(detail)),
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
            let blank_name = buffer.name.trim().is_empty();
            let blank_price = buffer.price.trim().is_empty();
            if blank_name {
                self.form.set_error("El nombre no puede estar vacío");
                return;
            }
            if blank_price {
                self.form.set_error("El precio no puede estar vacío");
                return;
            }
        }

        let Some(buffer) = self.form.begin_submit() else {
            return;
        };
        match self.repo.save(&buffer.to_detail()).await {
            Ok(_id) => {
                self.form.submit_ok();
                self.load_page(self.list.page).await;
            }
            Err(error) => self.form.submit_failed(error.message()),
        }
    }

    // ----- attachments -----

    pub async fn upload_file(&mut self, bytes: Vec<u8>, filename: &str) {
        let Some(product_id) = self.open_product_id() else {
            return;
        };
        match self.repo.upload_file(product_id, bytes, filename).await {
            Ok(()) => self.refresh_detail(product_id).await,
            Err(error) => self.form.set_error(error.message()),
        }
    }

    pub async fn add_image(&mut self, bytes: Vec<u8>, filename: &str) {
        let Some(product_id) = self.open_product_id() else {
            return;
        };
        match self.repo.add_image(product_id, bytes, filename, None).await {
            Ok(()) => self.refresh_detail(product_id).await,
            Err(error) => self.form.set_error(error.message()),
        }
    }

    /// Moves the image one slot toward the front; the server renumbers its
    /// siblings. Already-first images are re-asserted at slot 1.
    pub async fn move_image_up(&mut self, image_id: i64) {
        let Some((product_id, image)) = self.open_image(image_id) else {
            return;
        };
        let target = image.order.saturating_sub(1).max(1);
        match self.repo.reorder_image(image_id, target).await {
            Ok(()) => self.refresh_detail(product_id).await,
            Err(error) => self.form.set_error(error.message()),
        }
    }

    pub async fn move_image_down(&mut self, image_id: i64) {
        let Some((product_id, image)) = self.open_image(image_id) else {
            return;
        };
        let target = image.order + 1;
        match self.repo.reorder_image(image_id, target).await {
            Ok(()) => self.refresh_detail(product_id).await,
            Err(error) => self.form.set_error(error.message()),
        }
    }

    pub async fn delete_image(&mut self, image_id: i64) {
        let Some(product_id) = self.open_product_id() else {
            return;
        };
        match self.repo.delete_image(image_id).await {
            Ok(()) => self.refresh_detail(product_id).await,
            Err(error) => self.form.set_error(error.message()),
        }
    }

    fn open_product_id(&self) -> Option<i64> {
        self.form.buffer().and_then(|buffer| buffer.id)
    }

    fn open_image(&self, image_id: i64) -> Option<(i64, ProductImage)> {
        let buffer = self.form.buffer()?;
        let product_id = buffer.id?;
        let image = buffer
            .images
            .iter()
            .find(|image| image.id == image_id)
            .cloned()?;
        Some((product_id, image))
    }

    /// Re-reads attachment state after a mutation. Field edits in progress
    /// are kept; only `has_file` and the image list are refreshed.
    async fn refresh_detail(&mut self, product_id: i64) {
        if let Ok(detail) = self.repo.detail(product_id).await {
            if let Some(buffer) = self.form.buffer_mut() {
                let mut images = detail.images;
                images.sort_by_key(|image| image.order);
                buffer.has_file = detail.has_file;
                buffer.images = images;
            }
        }
    }
}
