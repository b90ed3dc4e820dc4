mod producto;

pub use self::producto::Producto;
