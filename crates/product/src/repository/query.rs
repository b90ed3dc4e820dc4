use crate::{
    abstract_trait::producto::repository::ProductoQueryRepositoryTrait,
    model::Producto as ProductoModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductoQueryRepository {
    db: ConnectionPool,
}

impl ProductoQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductoQueryRepositoryTrait for ProductoQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductoModel>, RepositoryError> {
        info!("🔍 Fetching all productos");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let productos = sqlx::query_as::<_, ProductoModel>(
            r#"
            SELECT id, nombre, precio, categoria_nombre
            FROM producto
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch productos: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(productos)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductoModel>, RepositoryError> {
        info!("🆔 Fetching producto by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductoModel>(
            r#"
            SELECT id, nombre, precio, categoria_nombre
            FROM producto
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch producto {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(result)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM producto WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to check producto {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(exists)
    }
}
