use crate::{
    abstract_trait::producto::{
        repository::{DynProductoCommandRepository, DynProductoQueryRepository},
        service::{DynProductoCommandService, DynProductoQueryService},
    },
    service::{command::ProductoCommandService, query::ProductoQueryService},
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub producto_query: DynProductoQueryService,
    pub producto_command: DynProductoCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("producto_query", &"ProductoQueryService")
            .field("producto_command", &"ProductoCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub query_repo: DynProductoQueryRepository,
    pub command_repo: DynProductoCommandRepository,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            query_repo,
            command_repo,
        } = deps;

        let producto_query = Arc::new(ProductoQueryService::new(query_repo.clone(), registry))
            as DynProductoQueryService;

        let producto_command = Arc::new(ProductoCommandService::new(
            query_repo,
            command_repo,
            registry,
        )) as DynProductoCommandService;

        Self {
            producto_query,
            producto_command,
        }
    }
}
