//! Profile fetch, edit, and purchase history against the stub backend.

mod common;

use std::sync::Arc;

use blockfile::repo::{HttpProfileRepo, ProfileRepo};
use blockfile::state::ProfileState;
use blockfile::Http;
use common::{Recorded, StubResponse, StubServer};

const PROFILE: &str = r#"{
    "ok": true,
    "perfil": {
        "id_usuario": 3, "nombre_usuario": "ana",
        "correo": "ana@example.com", "saldo": "12.50", "num_compras": 2
    }
}"#;

const PURCHASES: &str = r#"{
    "ok": true,
    "rows": [
        {"id": 1, "nombre": "Algebra I", "autor": "Rivas", "precio": 10.0, "compras": 4}
    ],
    "page": 1, "total_pages": 1
}"#;

const ADMIN_PROFILE: &str = r#"{
    "id_usuario": 1, "nombre_usuario": "root",
    "correo": "root@example.com", "rol": "admin"
}"#;

fn stub_backend(request: &Recorded) -> StubResponse {
    match request.path.as_str() {
        "/apimovil/perfil/" | "/apimovil/perfil/actualizar/" => StubResponse::json(PROFILE),
        "/apimovil/perfil/compras/" => StubResponse::json(PURCHASES),
        "/apimovil/admin/perfil/" => StubResponse::json(ADMIN_PROFILE),
        _ => StubResponse::error(404, r#"{"error": "No encontrado"}"#),
    }
}

fn state(base_url: &str) -> ProfileState {
    let http = Http::new(base_url).expect("client");
    let repo: Arc<dyn ProfileRepo> = Arc::new(HttpProfileRepo::new(http));
    ProfileState::new(repo)
}

#[tokio::test]
async fn profile_loads_into_the_screen() {
    let server = StubServer::start(stub_backend).await;
    let mut state = state(&server.base_url);

    state.load().await;

    let profile = state.profile.as_ref().expect("profile");
    assert_eq!(profile.username, "ana");
    assert_eq!(profile.balance, "12.50");
    assert_eq!(profile.purchase_count, 2);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn blank_password_is_left_out_of_the_update_body() {
    let server = StubServer::start(stub_backend).await;
    let mut state = state(&server.base_url);
    state.open_edit().await;
    state.edit.buffer_mut().expect("editing").email = "nueva@example.com".into();

    state.submit_edit().await;

    let update = server.last_request();
    assert_eq!(update.path, "/apimovil/perfil/actualizar/");
    let body = update.body_text();
    assert!(body.contains(r#""correo":"nueva@example.com""#));
    assert!(!body.contains("contrasena"), "unchanged password omitted");
    assert!(!state.edit.is_open());
}

#[tokio::test]
async fn entered_password_does_travel() {
    let server = StubServer::start(stub_backend).await;
    let mut state = state(&server.base_url);
    state.open_edit().await;
    state.edit.buffer_mut().expect("editing").password = "nueva-clave".into();

    state.submit_edit().await;

    assert!(server
        .last_request()
        .body_text()
        .contains(r#""contrasena":"nueva-clave""#));
}

#[tokio::test]
async fn admin_profile_round_trips_by_user_id() {
    let server = StubServer::start(stub_backend).await;
    let http = Http::new(&server.base_url).expect("client");
    let repo: Arc<dyn ProfileRepo> = Arc::new(HttpProfileRepo::new(http));

    let admin = repo.admin_profile(1).await.expect("admin profile");
    assert_eq!(admin.username, "root");
    assert_eq!(admin.role.as_deref(), Some("admin"));
    assert_eq!(server.last_request().query, "id_usuario=1");

    let updated = repo
        .update_admin_profile(&blockfile_core::dto::AdminProfileDto {
            id_usuario: 1,
            nombre_usuario: "root".into(),
            correo: "root@example.com".into(),
            rol: Some("admin".into()),
            contrasena: None,
        })
        .await
        .expect("update");
    assert_eq!(updated.email, "root@example.com");

    let post = server.last_request();
    assert_eq!(post.method, "POST");
    assert!(!post.body_text().contains("contrasena"));
}

#[tokio::test]
async fn purchase_history_is_a_plain_paginated_listing() {
    let server = StubServer::start(stub_backend).await;
    let mut state = state(&server.base_url);

    state.load_purchases(1).await;

    assert_eq!(server.last_request().query, "page=1");
    assert_eq!(state.purchases.items.len(), 1);
    assert_eq!(state.purchases.items[0].name, "Algebra I");
}
