use crate::model::Producto as ProductoModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields a client may supply when creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductoDTO {
    pub nombre: String,
    #[serde(default)]
    pub precio: f64,
    pub categoria_nombre: String,
}

// request to model, id left for storage to assign
impl From<CreateProductoDTO> for ProductoModel {
    fn from(value: CreateProductoDTO) -> Self {
        ProductoModel {
            id: None,
            nombre: value.nombre,
            precio: value.precio,
            categoria_nombre: value.categoria_nombre,
        }
    }
}
