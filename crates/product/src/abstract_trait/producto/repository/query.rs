use crate::model::Producto as ProductoModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductoQueryRepository = Arc<dyn ProductoQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductoQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductoModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductoModel>, RepositoryError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;
}
