use crate::model::Producto as ProductoModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductoCommandRepository = Arc<dyn ProductoCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductoCommandRepositoryTrait {
    /// Inserts when `producto.id` is `None`, otherwise replaces every column of that row.
    async fn save(&self, producto: &ProductoModel) -> Result<ProductoModel, RepositoryError>;
    /// Callers check existence first; deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
