use crate::domain::response::producto::ProductoDTO;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductoQueryService = Arc<dyn ProductoQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductoQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductoDTO>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ProductoDTO, ServiceError>;
}
