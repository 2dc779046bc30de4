use std::collections::HashSet;

use crate::collision;
use crate::entities::{Catalog, Inventory, Layout};

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

/// Every placed item lies fully on the footprint and overlaps no sibling.
pub fn layout_is_feasible(layout: &Layout, catalog: &Catalog) -> bool {
    let Some(cdef) = catalog.container_def(layout.def_id) else {
        return false;
    };
    layout.placed_items.iter().all(|(pk, pi)| {
        collision::can_place(
            &cdef.footprint,
            &layout.placed_items,
            &pi.shape,
            pi.origin,
            Some(pk),
        )
    })
}

/// The occupied-cell sets of all items in `layout` are pairwise disjoint.
pub fn placed_items_disjoint(layout: &Layout) -> bool {
    let mut seen = HashSet::new();
    layout
        .placed_items
        .values()
        .flat_map(|pi| pi.shape.occupied_cells(pi.origin))
        .all(|cell| seen.insert(cell))
}

pub fn inventory_is_feasible(inventory: &Inventory) -> bool {
    inventory
        .layouts
        .values()
        .all(|layout| layout_is_feasible(layout, &inventory.catalog))
}

/// Every instance references a definition present in the catalog.
pub fn references_resolve(inventory: &Inventory) -> bool {
    inventory.layouts.values().all(|layout| {
        inventory.catalog.container_def(layout.def_id).is_some()
            && layout
                .placed_items
                .values()
                .all(|pi| inventory.catalog.item_def(pi.def_id).is_some())
    })
}
