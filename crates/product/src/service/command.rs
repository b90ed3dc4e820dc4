use crate::{
    abstract_trait::producto::{
        repository::{DynProductoCommandRepository, DynProductoQueryRepository},
        service::ProductoCommandServiceTrait,
    },
    domain::requests::producto::CreateProductoDTO,
    model::Producto as ProductoModel,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use std::time::Instant;
use tracing::{error, info, warn};

/// Write side. Update and delete check existence before acting; the check and the
/// write are separate storage calls, so a concurrent delete in between is not detected.
#[derive(Clone)]
pub struct ProductoCommandService {
    pub query: DynProductoQueryRepository,
    pub command: DynProductoCommandRepository,
    pub metrics: Metrics,
}

impl ProductoCommandService {
    pub fn new(
        query: DynProductoQueryRepository,
        command: DynProductoCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry.sub_registry_with_prefix("producto_command"));

        Self {
            query,
            command,
            metrics,
        }
    }

    fn complete(&self, method: Method, start: Instant, is_success: bool) {
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };

        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }

    async fn ensure_exists(
        &self,
        method: Method,
        start: Instant,
        id: i64,
    ) -> Result<(), ServiceError> {
        match self.query.exists_by_id(id).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                warn!("⚠️ Producto ID {id} does not exist");
                self.complete(method, start, false);
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                error!("❌ Failed to check producto ID {id}: {e:?}");
                self.complete(method, start, false);
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[async_trait]
impl ProductoCommandServiceTrait for ProductoCommandService {
    async fn create(&self, req: CreateProductoDTO) -> Result<ProductoModel, ServiceError> {
        info!("🏗️ Creating producto: {}", req.nombre);
        let start = Instant::now();

        let producto = ProductoModel::from(req);

        let saved = self.command.save(&producto).await.map_err(|e| {
            error!("❌ Failed to create producto {}: {e:?}", producto.nombre);
            self.complete(Method::Post, start, false);
            ServiceError::Repo(e)
        })?;

        info!("✅ Producto created: {:?}", saved.id);
        self.complete(Method::Post, start, true);

        Ok(saved)
    }

    async fn update(
        &self,
        id: i64,
        mut producto: ProductoModel,
    ) -> Result<ProductoModel, ServiceError> {
        info!("🔄 Updating producto ID: {id}");
        let start = Instant::now();

        self.ensure_exists(Method::Put, start, id).await?;

        producto.id = Some(id);

        let updated = self.command.save(&producto).await.map_err(|e| {
            error!("❌ Failed to update producto ID {id}: {e:?}");
            self.complete(Method::Put, start, false);
            ServiceError::Repo(e)
        })?;

        info!("✅ Producto ID {id} updated");
        self.complete(Method::Put, start, true);

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting producto ID: {id}");
        let start = Instant::now();

        self.ensure_exists(Method::Delete, start, id).await?;

        self.command.delete_by_id(id).await.map_err(|e| {
            error!("❌ Failed to delete producto ID {id}: {e:?}");
            self.complete(Method::Delete, start, false);
            ServiceError::Repo(e)
        })?;

        info!("✅ Producto ID {id} deleted");
        self.complete(Method::Delete, start, true);

        Ok(())
    }
}
