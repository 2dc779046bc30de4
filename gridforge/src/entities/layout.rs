use slotmap::SlotMap;

use crate::entities::{Catalog, PItemKey, PlacedItem};

/// A live container: a reference to its
/// [`ContainerDef`](crate::entities::ContainerDef) and the items currently
/// placed in it. Many layouts may share one definition.
///
/// A layout exclusively owns its placed items; it only references its
/// definition by id. Invariant: at all committed times every placed item
/// lies fully on the footprint and no two items overlap.
#[derive(Clone, Debug)]
pub struct Layout {
    /// Id of the [`ContainerDef`](crate::entities::ContainerDef) this layout references
    pub def_id: usize,
    /// The items placed in this layout
    pub placed_items: SlotMap<PItemKey, PlacedItem>,
}

impl Layout {
    pub fn new(def_id: usize) -> Self {
        Layout {
            def_id,
            placed_items: SlotMap::with_key(),
        }
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// Inserts without validating; callers check
    /// [`collision::can_place`](crate::collision::can_place) first.
    pub(crate) fn place_item(&mut self, item: PlacedItem) -> PItemKey {
        self.placed_items.insert(item)
    }

    pub(crate) fn remove_item(&mut self, pk: PItemKey) -> Option<PlacedItem> {
        self.placed_items.remove(pk)
    }

    /// Sum of the definition weights of all placed items. Advisory only:
    /// weight never blocks a placement.
    pub fn total_weight(&self, catalog: &Catalog) -> f32 {
        self.placed_items
            .values()
            .filter_map(|pi| catalog.item_def(pi.def_id))
            .map(|def| def.weight)
            .sum()
    }
}
