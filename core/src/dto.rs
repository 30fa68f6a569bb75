//! Wire DTOs for the BlockFile REST contract.
//!
//! Field names mirror the backend's JSON exactly (the contract speaks
//! Spanish); optional fields carry `#[serde(default)]` so older backend
//! deployments that omit them still decode.

use serde::{Deserialize, Serialize};

/// Envelope shared by every paginated listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDto<T> {
    pub ok: bool,
    pub rows: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
}

/// Envelope shared by the simple mutation endpoints (comment, rate, image
/// operations). `calificacion_promedio` only appears on rating responses.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleResponseDto {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub calificacion_promedio: Option<f64>,
}

// ===== Auth =====

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub nombre: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub correo: String,
    pub contrasena: String,
}

/// Returned by both login and register. `rol` only appears for admin users.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionDto {
    pub id_usuario: i64,
    pub nombre_usuario: String,
    pub correo: String,
    pub saldo: String,
    pub excliente: bool,
    #[serde(default)]
    pub rol: Option<String>,
}

// ===== Catalog =====

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItemDto {
    pub id: i64,
    pub nombre: String,
    pub autor: String,
    pub precio: f64,
    #[serde(default)]
    pub imagen_1_id: Option<i64>,
    #[serde(default)]
    pub calificacion_promedio: Option<f64>,
    #[serde(default)]
    pub compras: i32,
}

// ===== Product detail =====

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDetailResponseDto {
    pub ok: bool,
    pub producto: ProductDetailDto,
    #[serde(default)]
    pub comentarios: Vec<CommentDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDetailDto {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    #[serde(default)]
    pub precio: Option<f64>,
    #[serde(default)]
    pub saldo_cliente: Option<f64>,
    pub compras: i32,
    pub calificacion_promedio: f64,
    pub autor: String,
    pub version: String,
    pub categoria: String,
    /// ISO-8601, display-only.
    #[serde(default)]
    pub fecha_publicacion: Option<String>,
    #[serde(default)]
    pub imagen_urls: Vec<String>,
    #[serde(default)]
    pub mostrar_acciones: bool,
    pub url_ttl: String,
    pub url_descargar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentDto {
    pub cliente: String,
    pub calificacion: i32,
    #[serde(default)]
    pub fecha: Option<String>,
    pub descripcion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest {
    pub descripcion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingRequest {
    pub calificacion: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseResponseDto {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub saldo_cliente: Option<f64>,
    #[serde(default)]
    pub cliente_compro: Option<bool>,
    #[serde(default)]
    pub compras: Option<i64>,
}

// ===== Rankings =====

#[derive(Debug, Clone, Deserialize)]
pub struct MostPurchasedDto {
    pub id: i64,
    pub top: i32,
    pub nombre: String,
    pub autor: String,
    pub categoria: String,
    #[serde(default)]
    pub precio: Option<f64>,
    pub compras: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopBuyerDto {
    pub id_usuario: i64,
    pub top: i32,
    pub nombre: String,
    pub compras: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BestRatedDto {
    pub id: i64,
    pub top: i32,
    pub nombre: String,
    pub autor: String,
    pub categoria: String,
    #[serde(default)]
    pub precio: Option<f64>,
    pub n_calificaciones: i32,
    pub calif_prom: f64,
}

// ===== Profile =====

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDto {
    pub id_usuario: i64,
    pub nombre_usuario: String,
    pub correo: String,
    pub saldo: String,
    pub num_compras: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponseDto {
    pub ok: bool,
    #[serde(default)]
    pub perfil: Option<ProfileDto>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub nombre_usuario: String,
    pub correo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchasedItemDto {
    pub id: i64,
    pub nombre: String,
    pub autor: String,
    #[serde(default)]
    pub precio: Option<f64>,
    #[serde(default)]
    pub imagen_1_id: Option<i64>,
    #[serde(default)]
    pub calificacion_promedio: Option<f64>,
    pub compras: i32,
}

/// Admin profile, sent back verbatim on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProfileDto {
    pub id_usuario: i64,
    pub nombre_usuario: String,
    pub correo: String,
    #[serde(default)]
    pub rol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contrasena: Option<String>,
}

// ===== Admin: products =====

#[derive(Debug, Clone, Deserialize)]
pub struct AdminProductItemDto {
    pub id: i64,
    pub nombre: String,
    pub autor: String,
    pub categoria: String,
    #[serde(default)]
    pub promedio: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminProductDetailDto {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub version: String,
    /// Decimal serialized as text by the backend.
    pub precio: String,
    #[serde(default)]
    pub autor_id: Option<i64>,
    #[serde(default)]
    pub categoria_id: Option<i64>,
    pub activo: bool,
    pub tiene_archivo: bool,
    #[serde(default)]
    pub imagenes: Vec<ProductImageDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductImageDto {
    pub id: i64,
    pub orden: u32,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
    pub version: String,
    pub precio: String,
    pub id_autor: Option<i64>,
    pub id_categoria: Option<i64>,
    pub activo: bool,
}

/// The product save endpoint answers with the persisted id only.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedProductDto {
    pub id: i64,
}

// ===== Admin: categories =====

#[derive(Debug, Clone, Deserialize)]
pub struct AdminCategoryItemDto {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteCategoryRequest {
    pub id_categoria: i64,
}

/// Envelope for category and user saves: `{ok, id, message?}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedIdDto {
    pub ok: bool,
    pub id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

// ===== Admin: users =====

#[derive(Debug, Clone, Deserialize)]
pub struct AdminUserItemDto {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub saldo: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminUserDetailDto {
    pub ok: bool,
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub correo: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub saldo: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveUserBalanceRequest {
    pub id: i64,
    pub saldo: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserRequest {
    pub id_usuario: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_item_defaults_optional_fields() {
        let item: CatalogItemDto =
            serde_json::from_str(r#"{"id": 1, "nombre": "A", "autor": "B", "precio": 3.0}"#)
                .unwrap();
        assert_eq!(item.imagen_1_id, None);
        assert_eq!(item.calificacion_promedio, None);
        assert_eq!(item.compras, 0);
    }

    #[test]
    fn page_envelope_decodes_generic_rows() {
        let body = r#"{"ok": true, "rows": [{"id": 2, "nombre": "C", "descripcion": ""}],
                       "page": 3, "total_pages": 9}"#;
        let page: PageDto<AdminCategoryItemDto> = serde_json::from_str(body).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.rows[0].descripcion, "");
    }

    #[test]
    fn update_profile_omits_blank_password() {
        let req = UpdateProfileRequest {
            nombre_usuario: "ana".into(),
            correo: "ana@example.com".into(),
            contrasena: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("contrasena"));
    }

    #[test]
    fn save_product_omits_missing_id_but_keeps_null_author() {
        let req = SaveProductRequest {
            id: None,
            nombre: "N".into(),
            descripcion: String::new(),
            version: "1.0".into(),
            precio: "9.99".into(),
            id_autor: None,
            id_categoria: Some(4),
            activo: true,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"id_autor\":null"));
        assert!(json.contains("\"id_categoria\":4"));
    }

    #[test]
    fn purchase_rejection_carries_message() {
        let res: PurchaseResponseDto =
            serde_json::from_str(r#"{"ok": false, "message": "saldo insuficiente"}"#).unwrap();
        assert!(!res.ok);
        assert_eq!(res.message.as_deref(), Some("saldo insuficiente"));
        assert_eq!(res.saldo_cliente, None);
    }
}
