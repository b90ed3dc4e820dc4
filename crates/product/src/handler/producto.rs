use crate::{
    abstract_trait::producto::service::{DynProductoCommandService, DynProductoQueryService},
    domain::{requests::producto::CreateProductoDTO, response::producto::ProductoDTO},
    model::Producto,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ApiError, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/producto",
    tag = "Producto",
    responses(
        (status = 200, description = "All stored productos", body = Vec<ProductoDTO>),
        (status = 404, description = "No productos stored"),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
pub async fn get_productos(
    Extension(service): Extension<DynProductoQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/producto/{id}",
    tag = "Producto",
    params(("id" = i64, Path, description = "Producto ID")),
    responses(
        (status = 200, description = "Producto details", body = ProductoDTO),
        (status = 404, description = "Producto not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
pub async fn get_producto(
    Extension(service): Extension<DynProductoQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/producto",
    tag = "Producto",
    request_body = CreateProductoDTO,
    responses(
        (status = 201, description = "Producto created", body = Producto),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
pub async fn create_producto(
    Extension(service): Extension<DynProductoCommandService>,
    Json(body): Json<CreateProductoDTO>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/producto/{id}",
    tag = "Producto",
    params(("id" = i64, Path, description = "Producto ID, overrides any id in the body")),
    request_body = Producto,
    responses(
        (status = 200, description = "Producto replaced", body = Producto),
        (status = 404, description = "Producto not found"),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
pub async fn update_producto(
    Extension(service): Extension<DynProductoCommandService>,
    Path(id): Path<i64>,
    Json(body): Json<Producto>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/producto/{id}",
    tag = "Producto",
    params(("id" = i64, Path, description = "Producto ID")),
    responses(
        (status = 204, description = "Producto deleted"),
        (status = 404, description = "Producto not found"),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
pub async fn delete_producto(
    Extension(service): Extension<DynProductoCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn producto_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/producto", get(get_productos).post(create_producto))
        .route(
            "/producto/{id}",
            get(get_producto)
                .put(update_producto)
                .delete(delete_producto),
        )
        .layer(Extension(app_state.di_container.producto_query.clone()))
        .layer(Extension(app_state.di_container.producto_command.clone()))
}
