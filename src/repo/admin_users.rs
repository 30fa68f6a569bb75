//! Admin user management. Only the balance is editable; deletion is gated
//! behind a confirmation flow in the state holder.

use async_trait::async_trait;
use blockfile_core::domain::{AdminUser, AdminUserDetail};
use blockfile_core::dto::{
    AdminUserDetailDto, AdminUserItemDto, DeleteUserRequest, PageDto, SaveUserBalanceRequest,
    SavedIdDto, SimpleResponseDto,
};
use blockfile_core::Page;

use crate::client::{push_filter, push_id_filter, Http};
use crate::error::{ApiError, Result};
use crate::repo::{expect_ok, page_from};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilters {
    pub id: String,
    pub name: String,
    pub balance: String,
}

#[async_trait]
pub trait AdminUsersRepo: Send + Sync {
    async fn page(&self, page: u32, filters: &UserFilters) -> Result<Page<AdminUser>>;
    async fn detail(&self, user_id: i64) -> Result<AdminUserDetail>;
    /// Balance travels as text; the backend parses the decimal.
    async fn save_balance(&self, user_id: i64, balance: &str) -> Result<i64>;
    async fn delete(&self, user_id: i64) -> Result<()>;
}

pub struct HttpAdminUsersRepo {
    http: Http,
}

impl HttpAdminUsersRepo {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AdminUsersRepo for HttpAdminUsersRepo {
    async fn page(&self, page: u32, filters: &UserFilters) -> Result<Page<AdminUser>> {
        let mut query = vec![("page", page.to_string())];
        push_id_filter(&mut query, "id", &filters.id);
        push_filter(&mut query, "nombre", &filters.name);
        push_filter(&mut query, "saldo", &filters.balance);

        let dto: PageDto<AdminUserItemDto> = self
            .http
            .get_json("apimovil/admin/usuarios/", &query)
            .await?;
        page_from(dto)
    }

    async fn detail(&self, user_id: i64) -> Result<AdminUserDetail> {
        let dto: AdminUserDetailDto = self
            .http
            .get_json(&format!("apimovil/admin/usuarios/detalle/{user_id}/"), &[])
            .await?;
        if !dto.ok {
            return Err(ApiError::rejected(
                "No se pudo obtener el detalle del usuario",
            ));
        }
        Ok(AdminUserDetail::from(dto))
    }

    async fn save_balance(&self, user_id: i64, balance: &str) -> Result<i64> {
        let body = SaveUserBalanceRequest {
            id: user_id,
            saldo: balance.to_string(),
        };
        let dto: SavedIdDto = self
            .http
            .post_json("apimovil/admin/usuarios/guardar/", &body)
            .await?;
        if !dto.ok {
            return Err(ApiError::rejected(
                dto.message
                    .unwrap_or_else(|| "Error al guardar usuario".to_string()),
            ));
        }
        Ok(dto.id)
    }

    async fn delete(&self, user_id: i64) -> Result<()> {
        let body = DeleteUserRequest {
            id_usuario: user_id,
        };
        let dto: SimpleResponseDto = self
            .http
            .post_json("apimovil/admin/usuarios/borrar/", &body)
            .await?;
        expect_ok(dto, "Error al eliminar usuario")
    }
}
