//! Client profile, purchase history, and the admin profile variant.

use async_trait::async_trait;
use blockfile_core::domain::{AdminProfile, Profile, PurchasedProduct};
use blockfile_core::dto::{
    AdminProfileDto, PageDto, ProfileResponseDto, PurchasedItemDto, UpdateProfileRequest,
};
use blockfile_core::Page;

use crate::client::{opt_filter, Http};
use crate::error::{ApiError, Result};
use crate::repo::page_from;

#[async_trait]
pub trait ProfileRepo: Send + Sync {
    async fn profile(&self) -> Result<Profile>;
    /// Blank password means "leave unchanged" and is omitted from the body.
    async fn update_profile(&self, username: &str, email: &str, password: &str) -> Result<Profile>;
    async fn purchases(&self, page: u32) -> Result<Page<PurchasedProduct>>;

    async fn admin_profile(&self, user_id: i64) -> Result<AdminProfile>;
    async fn update_admin_profile(&self, dto: &AdminProfileDto) -> Result<AdminProfile>;
}

pub struct HttpProfileRepo {
    http: Http,
}

impl HttpProfileRepo {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

fn unwrap_profile(dto: ProfileResponseDto, fallback: &str) -> Result<Profile> {
    match (dto.ok, dto.perfil) {
        (true, Some(perfil)) => Ok(Profile::from(perfil)),
        (_, _) => Err(ApiError::rejected(
            dto.error.unwrap_or_else(|| fallback.to_string()),
        )),
    }
}

#[async_trait]
impl ProfileRepo for HttpProfileRepo {
    async fn profile(&self) -> Result<Profile> {
        let dto: ProfileResponseDto = self.http.get_json("apimovil/perfil/", &[]).await?;
        unwrap_profile(dto, "No se pudo obtener el perfil.")
    }

    async fn update_profile(&self, username: &str, email: &str, password: &str) -> Result<Profile> {
        let body = UpdateProfileRequest {
            nombre_usuario: username.to_string(),
            correo: email.to_string(),
            contrasena: opt_filter(password),
        };
        let dto: ProfileResponseDto = self
            .http
            .post_json("apimovil/perfil/actualizar/", &body)
            .await?;
        unwrap_profile(dto, "No se pudo actualizar el perfil.")
    }

    async fn purchases(&self, page: u32) -> Result<Page<PurchasedProduct>> {
        let dto: PageDto<PurchasedItemDto> = self
            .http
            .get_json("apimovil/perfil/compras/", &[("page", page.to_string())])
            .await?;
        page_from(dto)
    }

    async fn admin_profile(&self, user_id: i64) -> Result<AdminProfile> {
        let dto: AdminProfileDto = self
            .http
            .get_json(
                "apimovil/admin/perfil/",
                &[("id_usuario", user_id.to_string())],
            )
            .await?;
        Ok(AdminProfile::from(dto))
    }

    async fn update_admin_profile(&self, dto: &AdminProfileDto) -> Result<AdminProfile> {
        let updated: AdminProfileDto = self.http.post_json("apimovil/admin/perfil/", dto).await?;
        Ok(AdminProfile::from(updated))
    }
}
