use crate::{domain::requests::producto::CreateProductoDTO, model::Producto as ProductoModel};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductoCommandService = Arc<dyn ProductoCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductoCommandServiceTrait {
    async fn create(&self, req: CreateProductoDTO) -> Result<ProductoModel, ServiceError>;
    async fn update(
        &self,
        id: i64,
        producto: ProductoModel,
    ) -> Result<ProductoModel, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}
