use crate::model::Producto as ProductoModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductoDTO {
    pub id: i64,
    pub nombre: String,
    pub categoria_nombre: String,
}

/// Projection of a stored row. Only rows read back from storage may be converted;
/// an unsaved entity has no id and is rejected in debug builds.
impl From<ProductoModel> for ProductoDTO {
    fn from(value: ProductoModel) -> Self {
        debug_assert!(
            value.id.is_some(),
            "unsaved producto converted to ProductoDTO"
        );

        ProductoDTO {
            id: value.id.unwrap_or_default(),
            nombre: value.nombre,
            categoria_nombre: value.categoria_nombre,
        }
    }
}
