use crate::{
    abstract_trait::producto::repository::ProductoCommandRepositoryTrait,
    model::Producto as ProductoModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ProductoCommandRepository {
    db: ConnectionPool,
}

impl ProductoCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductoCommandRepositoryTrait for ProductoCommandRepository {
    async fn save(&self, producto: &ProductoModel) -> Result<ProductoModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = match producto.id {
            None => sqlx::query_as::<_, ProductoModel>(
                r#"
                INSERT INTO producto (nombre, precio, categoria_nombre)
                VALUES ($1, $2, $3)
                RETURNING id, nombre, precio, categoria_nombre
                "#,
            )
            .bind(&producto.nombre)
            .bind(producto.precio)
            .bind(&producto.categoria_nombre),
            Some(id) => sqlx::query_as::<_, ProductoModel>(
                r#"
                INSERT INTO producto (id, nombre, precio, categoria_nombre)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO UPDATE
                SET nombre = EXCLUDED.nombre,
                    precio = EXCLUDED.precio,
                    categoria_nombre = EXCLUDED.categoria_nombre
                RETURNING id, nombre, precio, categoria_nombre
                "#,
            )
            .bind(id)
            .bind(&producto.nombre)
            .bind(producto.precio)
            .bind(&producto.categoria_nombre),
        }
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to save producto {}: {:?}", producto.nombre, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Saved producto ID {:?} ({})",
            result.id, result.nombre
        );
        Ok(result)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting producto: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM producto
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete producto {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Producto ID {} deleted ({} rows)",
            id,
            result.rows_affected()
        );
        Ok(())
    }
}
