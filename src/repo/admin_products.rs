//! Admin product management: listing, detail, save, file/image attachments.

use async_trait::async_trait;
use blockfile_core::domain::{AdminProduct, AdminProductDetail};
use blockfile_core::dto::{
    AdminProductDetailDto, AdminProductItemDto, PageDto, SaveProductRequest, SavedProductDto,
    SimpleResponseDto,
};
use blockfile_core::Page;
use reqwest::multipart::{Form, Part};

use crate::client::{push_filter, push_id_filter, Http};
use crate::error::{ApiError, Result};
use crate::repo::{expect_ok, page_from};

/// Raw filter inputs; `id` is treated as unset when it does not parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    pub id: String,
    pub name: String,
    pub author: String,
    pub category: String,
}

#[async_trait]
pub trait AdminProductsRepo: Send + Sync {
    async fn page(&self, page: u32, filters: &ProductFilters) -> Result<Page<AdminProduct>>;

    /// Fresh snapshot for the edit dialog; list-row fields are never trusted
    /// as edit defaults.
    async fn detail(&self, product_id: i64) -> Result<AdminProductDetail>;

    /// Saves the whole buffer; the server answers with the persisted id.
    async fn save(&self, detail: &AdminProductDetail) -> Result<i64>;

    /// Attaches the product's primary file. No payload comes back; callers
    /// re-fetch the detail to observe the new state.
    async fn upload_file(&self, product_id: i64, bytes: Vec<u8>, filename: &str) -> Result<()>;

    /// Attaches an image, optionally at a requested order slot.
    async fn add_image(
        &self,
        product_id: i64,
        bytes: Vec<u8>,
        filename: &str,
        order: Option<u32>,
    ) -> Result<()>;

    /// Asks the server to place `image_id` at `order`. Sibling renumbering
    /// is the server's business; callers re-fetch afterwards.
    async fn reorder_image(&self, image_id: i64, order: u32) -> Result<()>;

    async fn delete_image(&self, image_id: i64) -> Result<()>;
}

pub struct HttpAdminProductsRepo {
    http: Http,
}

impl HttpAdminProductsRepo {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

fn payload_part(bytes: Vec<u8>, filename: &str, mime: &str) -> Result<Part> {
    Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_str(mime)
        .map_err(|error| ApiError::Validation(format!("Archivo inválido: {error}")))
}

#[async_trait]
impl AdminProductsRepo for HttpAdminProductsRepo {
    async fn page(&self, page: u32, filters: &ProductFilters) -> Result<Page<AdminProduct>> {
        let mut query = vec![("page", page.to_string())];
        push_id_filter(&mut query, "id", &filters.id);
        push_filter(&mut query, "nombre", &filters.name);
        push_filter(&mut query, "autor", &filters.author);
        push_filter(&mut query, "categoria", &filters.category);

        let dto: PageDto<AdminProductItemDto> = self
            .http
            .get_json("apimovil/admin/productos/", &query)
            .await?;
        page_from(dto)
    }

    async fn detail(&self, product_id: i64) -> Result<AdminProductDetail> {
        let dto: AdminProductDetailDto = self
            .http
            .get_json(&format!("apimovil/admin/productos/detalle/{product_id}/"), &[])
            .await?;
        Ok(AdminProductDetail::from(dto))
    }

    async fn save(&self, detail: &AdminProductDetail) -> Result<i64> {
        let body = SaveProductRequest {
            id: detail.id,
            nombre: detail.name.clone(),
            descripcion: detail.description.clone(),
            version: detail.version.clone(),
            precio: detail.price.clone(),
            id_autor: detail.author_id,
            id_categoria: detail.category_id,
            activo: detail.active,
        };
        let dto: SavedProductDto = self
            .http
            .post_json("apimovil/admin/productos/guardar/", &body)
            .await?;
        Ok(dto.id)
    }

    async fn upload_file(&self, product_id: i64, bytes: Vec<u8>, filename: &str) -> Result<()> {
        let form = Form::new()
            .text("id_producto", product_id.to_string())
            .part(
                "archivo",
                payload_part(bytes, filename, "application/octet-stream")?,
            );
        let dto: SimpleResponseDto = self
            .http
            .post_multipart("apimovil/admin/productos/archivo/", form)
            .await?;
        expect_ok(dto, "No se pudo subir el archivo.")
    }

    async fn add_image(
        &self,
        product_id: i64,
        bytes: Vec<u8>,
        filename: &str,
        order: Option<u32>,
    ) -> Result<()> {
        let mut form = Form::new().text("id_producto", product_id.to_string());
        if let Some(order) = order {
            form = form.text("orden", order.to_string());
        }
        let form = form.part("archivo", payload_part(bytes, filename, "image/*")?);

        let dto: SimpleResponseDto = self
            .http
            .post_multipart("apimovil/admin/productos/imagenes/agregar/", form)
            .await?;
        expect_ok(dto, "No se pudo agregar la imagen.")
    }

    async fn reorder_image(&self, image_id: i64, order: u32) -> Result<()> {
        let dto: SimpleResponseDto = self
            .http
            .post_form(
                "apimovil/admin/productos/imagenes/reordenar/",
                &[
                    ("id_imagen", image_id.to_string()),
                    ("orden", order.to_string()),
                ],
            )
            .await?;
        expect_ok(dto, "No se pudo reordenar la imagen.")
    }

    async fn delete_image(&self, image_id: i64) -> Result<()> {
        let dto: SimpleResponseDto = self
            .http
            .post_form(
                "apimovil/admin/productos/imagenes/borrar/",
                &[("id_imagen", image_id.to_string())],
            )
            .await?;
        expect_ok(dto, "No se pudo eliminar la imagen.")
    }
}
