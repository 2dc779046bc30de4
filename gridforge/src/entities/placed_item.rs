use slotmap::new_key_type;

use crate::entities::ItemDef;
use crate::geometry::{Cell, RotationDir, ShapeMatrix};

new_key_type! {
    /// Unique key for each [`PlacedItem`] in a [`Layout`](crate::entities::Layout)
    pub struct PItemKey;
}

/// One occurrence of an item: either placed in a
/// [`Layout`](crate::entities::Layout), or held by the input collaborator
/// mid-gesture (in which case it is a member of no layout at all).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedItem {
    /// Id of the [`ItemDef`] this instance references
    pub def_id: usize,
    /// Top-left corner of the bounding box, container-local
    pub origin: Cell,
    /// Base shape with the current rotation/flip applied
    pub shape: ShapeMatrix,
    /// Number of clockwise quarter-turns applied (0..=3). Flip state is not
    /// tracked separately; it is folded into `shape`, so orientation is not
    /// reconstructible from this field alone.
    pub rotation: u8,
}

impl PlacedItem {
    /// A fresh instance of `def` in its base orientation, not yet placed.
    pub fn new(def: &ItemDef) -> Self {
        PlacedItem {
            def_id: def.id,
            origin: Cell(0, 0),
            shape: def.base_shape.clone(),
            rotation: 0,
        }
    }

    /// Copy with one quarter-turn applied. No validation happens here; the
    /// new orientation is only checked at commit time.
    pub fn rotate(&self, dir: RotationDir) -> PlacedItem {
        let (shape, delta) = match dir {
            RotationDir::Clockwise => (self.shape.rotate_cw(), 1),
            RotationDir::CounterClockwise => (self.shape.rotate_ccw(), 3),
        };
        PlacedItem {
            shape,
            rotation: (self.rotation + delta) % 4,
            ..self.clone()
        }
    }

    /// Copy mirrored along the vertical axis. `rotation` is untouched:
    /// flip state lives in `shape` only.
    pub fn flip(&self) -> PlacedItem {
        PlacedItem {
            shape: self.shape.flip_horizontal(),
            ..self.clone()
        }
    }
}
