mod command;
mod query;

pub use self::command::{DynProductoCommandRepository, ProductoCommandRepositoryTrait};
pub use self::query::{DynProductoQueryRepository, ProductoQueryRepositoryTrait};
