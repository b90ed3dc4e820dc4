mod command;
mod query;

pub use self::command::{DynProductoCommandService, ProductoCommandServiceTrait};
pub use self::query::{DynProductoQueryService, ProductoQueryServiceTrait};
