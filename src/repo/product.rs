//! Product detail and its actions: comment, rate, purchase.

use async_trait::async_trait;
use blockfile_core::domain::{Comment, ProductDetail};
use blockfile_core::dto::{
    CommentRequest, ProductDetailResponseDto, PurchaseResponseDto, RatingRequest,
    SimpleResponseDto,
};

use crate::client::Http;
use crate::error::{ApiError, Result};
use crate::repo::expect_ok;

/// Detail plus its comment thread, published together.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub detail: ProductDetail,
    pub comments: Vec<Comment>,
}

#[async_trait]
pub trait ProductRepo: Send + Sync {
    async fn detail(&self, product_id: i64) -> Result<ProductView>;
    async fn comment(&self, product_id: i64, text: &str) -> Result<()>;
    /// Returns the new average rating when the server reports one.
    async fn rate(&self, product_id: i64, rating: i32) -> Result<Option<f64>>;
    /// On acceptance the authoritative post-purchase detail is re-fetched
    /// and returned; a rejection leaves the caller's snapshot untouched.
    async fn buy(&self, product_id: i64) -> Result<ProductView>;
}

pub struct HttpProductRepo {
    http: Http,
}

impl HttpProductRepo {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    async fn fetch_detail(&self, product_id: i64) -> Result<ProductView> {
        let dto: ProductDetailResponseDto = self
            .http
            .get_json(&format!("apimovil/productos/{product_id}/"), &[])
            .await?;
        if !dto.ok {
            return Err(ApiError::rejected("Respuesta no válida del servidor"));
        }
        Ok(ProductView {
            detail: ProductDetail::from(dto.producto),
            comments: dto.comentarios.into_iter().map(Comment::from).collect(),
        })
    }
}

#[async_trait]
impl ProductRepo for HttpProductRepo {
    async fn detail(&self, product_id: i64) -> Result<ProductView> {
        self.fetch_detail(product_id).await
    }

    async fn comment(&self, product_id: i64, text: &str) -> Result<()> {
        let body = CommentRequest {
            descripcion: text.to_string(),
        };
        let dto: SimpleResponseDto = self
            .http
            .post_json(&format!("apimovil/productos/{product_id}/comentar/"), &body)
            .await?;
        expect_ok(dto, "No se pudo registrar el comentario.")
    }

    async fn rate(&self, product_id: i64, rating: i32) -> Result<Option<f64>> {
        let body = RatingRequest {
            calificacion: rating,
        };
        let dto: SimpleResponseDto = self
            .http
            .post_json(&format!("apimovil/productos/{product_id}/calificar/"), &body)
            .await?;
        let average = dto.calificacion_promedio;
        expect_ok(dto, "No se pudo registrar la calificación.")?;
        Ok(average)
    }

    async fn buy(&self, product_id: i64) -> Result<ProductView> {
        let dto: PurchaseResponseDto = self
            .http
            .post_json(
                &format!("apimovil/productos/{product_id}/comprar/"),
                &serde_json::json!({}),
            )
            .await?;
        if !dto.ok {
            return Err(ApiError::rejected(
                dto.message
                    .unwrap_or_else(|| "No se pudo realizar la compra.".to_string()),
            ));
        }
        self.fetch_detail(product_id).await
    }
}
