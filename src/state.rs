//! Screen state holders.
//!
//! One holder per screen owns that screen's observable state (filters,
//! pagination, loading/error flags, form buffers) and orchestrates its data
//! operations through the injected repository. Holders are independent of
//! each other; the only shared mutable resource in the whole client is the
//! session cookie store.
//!
//! Every async method drives exactly one call and suspends until it lands,
//! so a holder's state is only ever mutated by its own call-completions.

pub mod admin_categories;
pub mod admin_products;
pub mod admin_users;
pub mod auth;
pub mod catalog;
pub mod product;
pub mod profile;
pub mod rankings;

pub use admin_categories::{AdminCategoriesState, CategoryBuffer};
pub use admin_products::{AdminProductsState, ProductBuffer};
pub use admin_users::{AdminUsersState, UserBuffer};
pub use auth::AuthState;
pub use catalog::CatalogState;
pub use product::{CommentForm, DownloadState, ProductDetailState, PurchaseState, RatingForm};
pub use profile::{ProfileBuffer, ProfileState};
pub use rankings::RankingsState;
