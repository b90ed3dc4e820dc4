use crate::{
    abstract_trait::producto::{
        repository::DynProductoQueryRepository, service::ProductoQueryServiceTrait,
    },
    domain::response::producto::ProductoDTO,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use std::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductoQueryService {
    pub query: DynProductoQueryRepository,
    pub metrics: Metrics,
}

impl ProductoQueryService {
    pub fn new(query: DynProductoQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry.sub_registry_with_prefix("producto_query"));

        Self { query, metrics }
    }

    fn complete(&self, start: Instant, is_success: bool) {
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };

        self.metrics
            .record(Method::Get, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ProductoQueryServiceTrait for ProductoQueryService {
    async fn find_all(&self) -> Result<Vec<ProductoDTO>, ServiceError> {
        info!("🔍 Finding all productos");
        let start = Instant::now();

        let productos = match self.query.find_all().await {
            Ok(productos) => productos,
            Err(e) => {
                error!("❌ Failed to fetch all productos: {e:?}");
                self.complete(start, false);
                return Err(ServiceError::Repo(e));
            }
        };

        if productos.is_empty() {
            info!("📭 No productos stored");
            self.complete(start, false);
            return Err(ServiceError::NotFound);
        }

        let data: Vec<ProductoDTO> = productos.into_iter().map(ProductoDTO::from).collect();

        info!("✅ Found {} productos", data.len());
        self.complete(start, true);

        Ok(data)
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductoDTO, ServiceError> {
        info!("🆔 Finding producto by ID: {id}");
        let start = Instant::now();

        let producto = match self.query.find_by_id(id).await {
            Ok(Some(producto)) => producto,
            Ok(None) => {
                error!("❌ Producto not found with ID: {id}");
                self.complete(start, false);
                return Err(ServiceError::ProductoNotFound(id));
            }
            Err(e) => {
                error!("❌ Database error while finding producto ID {id}: {e:?}");
                self.complete(start, false);
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Producto retrieved: '{}' (ID: {id})", producto.nombre);
        self.complete(start, true);

        Ok(ProductoDTO::from(producto))
    }
}
