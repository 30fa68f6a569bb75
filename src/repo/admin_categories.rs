//! Admin category management.

use async_trait::async_trait;
use blockfile_core::domain::AdminCategory;
use blockfile_core::dto::{
    AdminCategoryItemDto, DeleteCategoryRequest, PageDto, SaveCategoryRequest, SavedIdDto,
    SimpleResponseDto,
};
use blockfile_core::Page;

use crate::client::{push_filter, push_id_filter, Http};
use crate::error::{ApiError, Result};
use crate::repo::{expect_ok, page_from};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilters {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[async_trait]
pub trait AdminCategoriesRepo: Send + Sync {
    async fn page(&self, page: u32, filters: &CategoryFilters) -> Result<Page<AdminCategory>>;
    /// `id = None` creates, `Some` updates. Returns the persisted id.
    async fn save(&self, id: Option<i64>, name: &str, description: &str) -> Result<i64>;
    async fn delete(&self, category_id: i64) -> Result<()>;
}

pub struct HttpAdminCategoriesRepo {
    http: Http,
}

impl HttpAdminCategoriesRepo {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AdminCategoriesRepo for HttpAdminCategoriesRepo {
    async fn page(&self, page: u32, filters: &CategoryFilters) -> Result<Page<AdminCategory>> {
        let mut query = vec![("page", page.to_string())];
        push_id_filter(&mut query, "id", &filters.id);
        push_filter(&mut query, "nombre", &filters.name);
        push_filter(&mut query, "descripcion", &filters.description);

        let dto: PageDto<AdminCategoryItemDto> = self
            .http
            .get_json("apimovil/admin/categorias/", &query)
            .await?;
        page_from(dto)
    }

    async fn save(&self, id: Option<i64>, name: &str, description: &str) -> Result<i64> {
        let body = SaveCategoryRequest {
            id,
            nombre: name.to_string(),
            descripcion: description.to_string(),
        };
        let dto: SavedIdDto = self
            .http
            .post_json("apimovil/admin/categorias/guardar/", &body)
            .await?;
        if !dto.ok {
            return Err(ApiError::rejected(
                dto.message
                    .unwrap_or_else(|| "Error al guardar la categoría".to_string()),
            ));
        }
        Ok(dto.id)
    }

    async fn delete(&self, category_id: i64) -> Result<()> {
        let body = DeleteCategoryRequest {
            id_categoria: category_id,
        };
        let dto: SimpleResponseDto = self
            .http
            .post_json("apimovil/admin/categorias/borrar/", &body)
            .await?;
        expect_ok(dto, "Error al eliminar la categoría")
    }
}
