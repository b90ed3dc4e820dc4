//! Drives the full router over the in-memory repository.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use product::{
    abstract_trait::producto::repository::ProductoQueryRepositoryTrait,
    domain::response::producto::ProductoDTO, handler::AppRouter, model::Producto,
    repository::{ProductoRepository, in_memory::InMemoryProductoRepository},
    state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn producto(nombre: &str, categoria: &str) -> Producto {
    Producto {
        id: None,
        nombre: nombre.into(),
        precio: 12.5,
        categoria_nombre: categoria.into(),
    }
}

async fn app_with(productos: Vec<Producto>) -> (InMemoryProductoRepository, Router) {
    let repo = InMemoryProductoRepository::with_productos(productos)
        .await
        .unwrap();
    let state = AppState::new(ProductoRepository::in_memory(repo.clone()));
    (repo, AppRouter::build(state))
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    serde_json::from_slice(&body_bytes(body).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn list_on_empty_storage_returns_404() {
    let (_, app) = app_with(vec![]).await;

    let response = app.oneshot(get("/producto")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn list_returns_one_projection_per_row() {
    let (_, app) = app_with(vec![
        producto("Mesa", "Muebles"),
        producto("Cafetera", "Cocina"),
        producto("Lámpara", "Iluminación"),
    ])
    .await;

    let response = app.oneshot(get("/producto")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let productos: Vec<ProductoDTO> = json_body(response.into_body()).await;
    assert_eq!(productos.len(), 3);
    assert_eq!(
        productos[1],
        ProductoDTO {
            id: 2,
            nombre: "Cafetera".into(),
            categoria_nombre: "Cocina".into(),
        }
    );
}

#[tokio::test]
async fn list_entries_omit_the_price() {
    let (_, app) = app_with(vec![producto("Mesa", "Muebles")]).await;

    let response = app.oneshot(get("/producto")).await.unwrap();
    let body: Value = json_body(response.into_body()).await;

    assert_eq!(
        body,
        json!([{"id": 1, "nombre": "Mesa", "categoriaNombre": "Muebles"}])
    );
}

#[tokio::test]
async fn get_existing_returns_stored_fields() {
    let (_, app) = app_with(vec![producto("Mesa", "Muebles"), producto("Silla", "Muebles")]).await;

    let response = app.oneshot(get("/producto/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let dto: ProductoDTO = json_body(response.into_body()).await;
    assert_eq!(dto.id, 2);
    assert_eq!(dto.nombre, "Silla");
    assert_eq!(dto.categoria_nombre, "Muebles");
}

#[tokio::test]
async fn get_missing_returns_structured_error_with_id() {
    let (_, app) = app_with(vec![producto("Mesa", "Muebles")]).await;

    for missing in [0_i64, 2, 77, 999_999] {
        let response = app
            .clone()
            .oneshot(get(&format!("/producto/{missing}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["estado"], "NOT_FOUND");
        assert!(body["fecha"].is_string());
        assert!(
            body["mensaje"]
                .as_str()
                .unwrap()
                .contains(&missing.to_string())
        );
    }
}

#[tokio::test]
async fn get_with_non_numeric_id_is_a_client_error() {
    let (_, app) = app_with(vec![producto("Mesa", "Muebles")]).await;

    let response = app.oneshot(get("/producto/abc")).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn create_returns_201_with_assigned_id_and_submitted_fields() {
    let (repo, app) = app_with(vec![]).await;

    let response = app
        .oneshot(with_json(
            "POST",
            "/producto",
            json!({"nombre": "Mesa", "categoriaNombre": "Muebles"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Producto = json_body(response.into_body()).await;
    let id = created.id.expect("server assigns an id");
    assert_eq!(created.nombre, "Mesa");
    assert_eq!(created.categoria_nombre, "Muebles");
    assert!(repo.exists_by_id(id).await.unwrap());
}

#[tokio::test]
async fn create_returns_the_full_entity_including_price() {
    let (_, app) = app_with(vec![]).await;

    let response = app
        .oneshot(with_json(
            "POST",
            "/producto",
            json!({"nombre": "Cafetera", "precio": 24.5, "categoriaNombre": "Cocina"}),
        ))
        .await
        .unwrap();

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["precio"], 24.5);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn update_uses_path_id_over_body_id() {
    let (repo, app) = app_with(vec![
        producto("A", "Uno"),
        producto("B", "Uno"),
        producto("C", "Uno"),
        producto("D", "Uno"),
        producto("E", "Uno"),
    ])
    .await;

    let response = app
        .oneshot(with_json(
            "PUT",
            "/producto/5",
            json!({"id": 999, "nombre": "X", "categoriaNombre": "Y"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Producto = json_body(response.into_body()).await;
    assert_eq!(updated.id, Some(5));
    assert_eq!(updated.nombre, "X");
    assert_eq!(updated.categoria_nombre, "Y");

    let stored = repo.find_by_id(5).await.unwrap().unwrap();
    assert_eq!(stored, updated);
    assert!(!repo.exists_by_id(999).await.unwrap());
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (repo, app) = app_with(vec![Producto {
        precio: 80.0,
        ..producto("Mesa", "Muebles")
    }])
    .await;

    app.oneshot(with_json(
        "PUT",
        "/producto/1",
        json!({"nombre": "Mesa", "categoriaNombre": "Muebles"}),
    ))
    .await
    .unwrap();

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.precio, 0.0);
}

#[tokio::test]
async fn update_missing_returns_empty_404_and_keeps_storage() {
    let (repo, app) = app_with(vec![producto("Mesa", "Muebles")]).await;
    let before = repo.find_all().await.unwrap();

    let response = app
        .oneshot(with_json(
            "PUT",
            "/producto/999999",
            json!({"nombre": "X", "categoriaNombre": "Y"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response.into_body()).await.is_empty());
    assert_eq!(repo.find_all().await.unwrap(), before);
}

#[tokio::test]
async fn delete_missing_returns_empty_404_and_keeps_storage() {
    let (repo, app) = app_with(vec![producto("Mesa", "Muebles")]).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/producto/999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response.into_body()).await.is_empty());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn delete_existing_returns_204_and_get_then_fails() {
    let (_, app) = app_with(vec![producto("Mesa", "Muebles"), producto("Silla", "Muebles")]).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/producto/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response.into_body()).await.is_empty());

    let response = app.oneshot(get("/producto/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["mensaje"].as_str().unwrap().contains('1'));
}

#[tokio::test]
async fn metrics_endpoint_exposes_request_counters() {
    let (_, app) = app_with(vec![producto("Mesa", "Muebles")]).await;

    app.clone().oneshot(get("/producto/1")).await.unwrap();
    app.clone().oneshot(get("/producto/42")).await.unwrap();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = String::from_utf8(body_bytes(response.into_body()).await).unwrap();
    assert!(text.contains("producto_query_requests_total"));
    assert!(text.contains("status=\"Success\""));
    assert!(text.contains("status=\"Error\""));
}

#[tokio::test]
async fn openapi_document_lists_the_producto_paths() {
    let (_, app) = app_with(vec![]).await;

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc: Value = json_body(response.into_body()).await;
    assert!(doc["paths"]["/producto"]["get"].is_object());
    assert!(doc["paths"]["/producto"]["post"].is_object());
    assert!(doc["paths"]["/producto/{id}"]["put"].is_object());
    assert!(doc["paths"]["/producto/{id}"]["delete"].is_object());
}
