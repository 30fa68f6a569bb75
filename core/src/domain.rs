//! Domain records consumed by the UI layer.
//!
//! Each record is a read-only snapshot mapped from its wire DTO; the client
//! never mutates one locally, it re-fetches and replaces. Conversions live
//! here so every repository maps the same way.

use crate::dto;

/// Authenticated user, as returned by login/register.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    /// Decimal serialized as text by the backend; display-only.
    pub balance: String,
    pub former_client: bool,
    pub role: Option<String>,
}

impl From<dto::SessionDto> for Session {
    fn from(d: dto::SessionDto) -> Self {
        Self {
            user_id: d.id_usuario,
            username: d.nombre_usuario,
            email: d.correo,
            balance: d.saldo,
            former_client: d.excliente,
            role: d.rol,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub price: f64,
    pub image_id: Option<i64>,
    pub average_rating: Option<f64>,
    pub purchases: i32,
}

impl From<dto::CatalogItemDto> for CatalogProduct {
    fn from(d: dto::CatalogItemDto) -> Self {
        Self {
            id: d.id,
            name: d.nombre,
            author: d.autor,
            price: d.precio,
            image_id: d.imagen_1_id,
            average_rating: d.calificacion_promedio,
            purchases: d.compras,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub client_balance: Option<f64>,
    pub purchases: i32,
    pub average_rating: f64,
    pub author: String,
    pub version: String,
    pub category: String,
    pub published_at: Option<String>,
    pub image_urls: Vec<String>,
    /// Purchased-state flag: the backend decides whether download/comment
    /// actions are shown.
    pub show_actions: bool,
    pub ttl_url: String,
    pub download_url: String,
}

impl From<dto::ProductDetailDto> for ProductDetail {
    fn from(d: dto::ProductDetailDto) -> Self {
        Self {
            id: d.id,
            name: d.nombre,
            description: d.descripcion,
            price: d.precio,
            client_balance: d.saldo_cliente,
            purchases: d.compras,
            average_rating: d.calificacion_promedio,
            author: d.autor,
            version: d.version,
            category: d.categoria,
            published_at: d.fecha_publicacion,
            image_urls: d.imagen_urls,
            show_actions: d.mostrar_acciones,
            ttl_url: d.url_ttl,
            download_url: d.url_descargar,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub client: String,
    pub rating: i32,
    pub date: Option<String>,
    pub body: String,
}

impl From<dto::CommentDto> for Comment {
    fn from(d: dto::CommentDto) -> Self {
        Self {
            client: d.cliente,
            rating: d.calificacion,
            date: d.fecha,
            body: d.descripcion,
        }
    }
}

// ===== Rankings =====

#[derive(Debug, Clone, PartialEq)]
pub struct MostPurchased {
    pub id: i64,
    pub top: i32,
    pub name: String,
    pub author: String,
    pub category: String,
    pub price: Option<f64>,
    pub purchases: i32,
}

impl From<dto::MostPurchasedDto> for MostPurchased {
    fn from(d: dto::MostPurchasedDto) -> Self {
        Self {
            id: d.id,
            top: d.top,
            name: d.nombre,
            author: d.autor,
            category: d.categoria,
            price: d.precio,
            purchases: d.compras,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopBuyer {
    pub user_id: i64,
    pub top: i32,
    pub name: String,
    pub purchases: i32,
}

impl From<dto::TopBuyerDto> for TopBuyer {
    fn from(d: dto::TopBuyerDto) -> Self {
        Self {
            user_id: d.id_usuario,
            top: d.top,
            name: d.nombre,
            purchases: d.compras,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestRated {
    pub id: i64,
    pub top: i32,
    pub name: String,
    pub author: String,
    pub category: String,
    pub price: Option<f64>,
    pub rating_count: i32,
    pub average: f64,
}

impl From<dto::BestRatedDto> for BestRated {
    fn from(d: dto::BestRatedDto) -> Self {
        Self {
            id: d.id,
            top: d.top,
            name: d.nombre,
            author: d.autor,
            category: d.categoria,
            price: d.precio,
            rating_count: d.n_calificaciones,
            average: d.calif_prom,
        }
    }
}

// ===== Profile =====

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub balance: String,
    pub purchase_count: i32,
}

impl From<dto::ProfileDto> for Profile {
    fn from(d: dto::ProfileDto) -> Self {
        Self {
            user_id: d.id_usuario,
            username: d.nombre_usuario,
            email: d.correo,
            balance: d.saldo,
            purchase_count: d.num_compras,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchasedProduct {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub price: Option<f64>,
    pub image_id: Option<i64>,
    pub average_rating: Option<f64>,
    pub purchases: i32,
}

impl From<dto::PurchasedItemDto> for PurchasedProduct {
    fn from(d: dto::PurchasedItemDto) -> Self {
        Self {
            id: d.id,
            name: d.nombre,
            author: d.autor,
            price: d.precio,
            image_id: d.imagen_1_id,
            average_rating: d.calificacion_promedio,
            purchases: d.compras,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminProfile {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: Option<String>,
}

impl From<dto::AdminProfileDto> for AdminProfile {
    fn from(d: dto::AdminProfileDto) -> Self {
        Self {
            user_id: d.id_usuario,
            username: d.nombre_usuario,
            email: d.correo,
            role: d.rol,
        }
    }
}

// ===== Admin: products =====

#[derive(Debug, Clone, PartialEq)]
pub struct AdminProduct {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub category: String,
    pub average: Option<f64>,
}

impl From<dto::AdminProductItemDto> for AdminProduct {
    fn from(d: dto::AdminProductItemDto) -> Self {
        Self {
            id: d.id,
            name: d.nombre,
            author: d.autor,
            category: d.categoria,
            average: d.promedio,
        }
    }
}

/// Full editable product snapshot. `id` is `None` only while staging a new
/// product that has never been saved.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminProductDetail {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub version: String,
    /// Decimal kept as text; the backend parses it.
    pub price: String,
    pub author_id: Option<i64>,
    pub category_id: Option<i64>,
    pub active: bool,
    pub has_file: bool,
    pub images: Vec<ProductImage>,
}

impl From<dto::AdminProductDetailDto> for AdminProductDetail {
    fn from(d: dto::AdminProductDetailDto) -> Self {
        Self {
            id: Some(d.id),
            name: d.nombre,
            description: d.descripcion,
            version: d.version,
            price: d.precio,
            author_id: d.autor_id,
            category_id: d.categoria_id,
            active: d.activo,
            has_file: d.tiene_archivo,
            images: d.imagenes.into_iter().map(ProductImage::from).collect(),
        }
    }
}

/// One image attached to a product. `order` defines display sequence; values
/// are server-assigned and not guaranteed contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub id: i64,
    pub order: u32,
    pub url: String,
}

impl From<dto::ProductImageDto> for ProductImage {
    fn from(d: dto::ProductImageDto) -> Self {
        Self {
            id: d.id,
            order: d.orden,
            url: d.url,
        }
    }
}

// ===== Admin: categories / users =====

#[derive(Debug, Clone, PartialEq)]
pub struct AdminCategory {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<dto::AdminCategoryItemDto> for AdminCategory {
    fn from(d: dto::AdminCategoryItemDto) -> Self {
        Self {
            id: d.id,
            name: d.nombre,
            description: d.descripcion,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    /// Rendered as text; blank when the backend omitted it.
    pub balance: String,
}

impl From<dto::AdminUserItemDto> for AdminUser {
    fn from(d: dto::AdminUserItemDto) -> Self {
        Self {
            id: d.id,
            name: d.nombre,
            balance: d.saldo.map(|s| s.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminUserDetail {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub registered_at: Option<String>,
    pub balance: Option<String>,
}

impl From<dto::AdminUserDetailDto> for AdminUserDetail {
    fn from(d: dto::AdminUserDetailDto) -> Self {
        Self {
            id: d.id,
            name: d.nombre,
            email: d.correo,
            registered_at: d.fecha,
            balance: d.saldo,
        }
    }
}
