use crate::{
    abstract_trait::producto::repository::{
        ProductoCommandRepositoryTrait, ProductoQueryRepositoryTrait,
    },
    model::Producto as ProductoModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i64, ProductoModel>,
    last_id: i64,
}

/// Map-backed repository for tests and database-less local runs.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductoRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store through `save`, so every row receives a fresh id.
    pub async fn with_productos(productos: Vec<ProductoModel>) -> Result<Self, RepositoryError> {
        let repo = Self::new();
        for producto in productos {
            repo.save(&ProductoModel { id: None, ..producto }).await?;
        }
        Ok(repo)
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductoQueryRepositoryTrait for InMemoryProductoRepository {
    async fn find_all(&self) -> Result<Vec<ProductoModel>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductoModel>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.rows.contains_key(&id))
    }
}

#[async_trait]
impl ProductoCommandRepositoryTrait for InMemoryProductoRepository {
    async fn save(&self, producto: &ProductoModel) -> Result<ProductoModel, RepositoryError> {
        let mut store = self.store.write().await;

        let id = match producto.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                store.last_id += 1;
                store.last_id
            }
        };

        let saved = ProductoModel {
            id: Some(id),
            ..producto.clone()
        };
        store.rows.insert(id, saved.clone());

        info!(producto_id = id, "Saved producto");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store.rows.remove(&id);
        Ok(())
    }
}
