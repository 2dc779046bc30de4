use crate::geometry::ShapeMatrix;

/// Container template: a footprint whose unoccupied cells are holes, plus an
/// optional weight capacity. Referenced by any number of live
/// [`Layout`](crate::entities::Layout)s.
#[derive(Clone, Debug)]
pub struct ContainerDef {
    pub id: usize,
    pub name: String,
    /// Usable cells of the container. `false` cells are holes: not part of
    /// the footprint, nothing may cover them.
    pub footprint: ShapeMatrix,
    /// Weight capacity. `None` means unlimited; such a container is never
    /// overweight.
    pub max_weight: Option<f32>,
}
