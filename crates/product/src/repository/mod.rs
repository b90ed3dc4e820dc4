pub mod command;
pub mod in_memory;
pub mod query;

use self::command::ProductoCommandRepository;
use self::in_memory::InMemoryProductoRepository;
use self::query::ProductoQueryRepository;

use crate::abstract_trait::producto::repository::{
    DynProductoCommandRepository, DynProductoQueryRepository,
};
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductoRepository {
    pub query: DynProductoQueryRepository,
    pub command: DynProductoCommandRepository,
}

impl ProductoRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(ProductoQueryRepository::new(pool.clone())) as DynProductoQueryRepository;

        let command =
            Arc::new(ProductoCommandRepository::new(pool)) as DynProductoCommandRepository;

        Self { query, command }
    }

    /// Both sides backed by the same in-memory store.
    pub fn in_memory(store: InMemoryProductoRepository) -> Self {
        let store = Arc::new(store);

        Self {
            query: store.clone() as DynProductoQueryRepository,
            command: store as DynProductoCommandRepository,
        }
    }
}
