use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use slotmap::{SlotMap, new_key_type};

use crate::autopack::{self, PackResult, SortConfig};
use crate::collision;
use crate::entities::{Catalog, ContainerDef, Layout, PItemKey, PlacedItem};
use crate::geometry::{Cell, ShapeMatrix};
use crate::targeting;
use crate::util::assertions;

new_key_type! {
    /// Unique key for each [`Layout`] in an [`Inventory`]
    pub struct LayKey;
}

/// The mutable engine state: a catalog of definitions plus the live
/// container layouts.
///
/// All state transitions execute synchronously on the caller's thread in
/// response to discrete events; each one leaves every layout feasible.
/// Item lists are only ever mutated through these operations, and
/// [`Inventory::auto_sort`] replaces a layout's items as a single step, so
/// no reader observes a partially updated list.
#[derive(Clone, Debug)]
pub struct Inventory {
    pub catalog: Catalog,
    pub layouts: SlotMap<LayKey, Layout>,
}

impl Inventory {
    pub fn new(catalog: Catalog) -> Self {
        Inventory {
            catalog,
            layouts: SlotMap::with_key(),
        }
    }

    /// Opens a live container of the given definition.
    pub fn spawn_layout(&mut self, def_id: usize) -> Result<LayKey> {
        self.catalog
            .container_def(def_id)
            .with_context(|| format!("InvalidReference: no container definition with id {def_id}"))?;
        Ok(self.layouts.insert(Layout::new(def_id)))
    }

    /// Closes a live container, dropping its items.
    pub fn despawn_layout(&mut self, lkey: LayKey) -> Option<Layout> {
        self.layouts.remove(lkey)
    }

    fn layout_and_def(&self, lkey: LayKey) -> Result<(&Layout, &ContainerDef)> {
        let layout = self.layouts.get(lkey).context("layout key is stale")?;
        let cdef = self
            .catalog
            .container_def(layout.def_id)
            .with_context(|| {
                format!(
                    "InvalidReference: layout references missing container definition {}",
                    layout.def_id
                )
            })?;
        Ok((layout, cdef))
    }

    /// Removes an item instance from a layout and hands it to the caller.
    ///
    /// From this moment the instance is a member of no layout. A gesture
    /// that ends without a valid drop target must re-commit the item to its
    /// source layout at its original origin, which always succeeds: the
    /// cells it vacated are still free.
    pub fn pick_up(&mut self, lkey: LayKey, pk: PItemKey) -> Result<PlacedItem> {
        let layout = self.layouts.get_mut(lkey).context("layout key is stale")?;
        layout
            .remove_item(pk)
            .context("item instance not found in layout")
    }

    /// Validates `item` at `origin` and commits it on success. On rejection
    /// the item is handed back unchanged; returning it to its source is the
    /// caller's responsibility (the pick-up already removed it).
    pub fn try_commit(
        &mut self,
        lkey: LayKey,
        item: PlacedItem,
        origin: Cell,
    ) -> Result<CommitOutcome> {
        let (layout, cdef) = self.layout_and_def(lkey)?;
        if !collision::can_place(
            &cdef.footprint,
            &layout.placed_items,
            &item.shape,
            origin,
            None,
        ) {
            return Ok(CommitOutcome::Rejected(item));
        }

        let pk = self.layouts[lkey].place_item(PlacedItem { origin, ..item });
        debug_assert!(assertions::layout_is_feasible(
            &self.layouts[lkey],
            &self.catalog
        ));
        Ok(CommitOutcome::Placed(pk))
    }

    /// Ghost cells and validity for `shape` hovering over `hover`, anchored
    /// by its center cell.
    ///
    /// Read-only and idempotent: recomputing it any number of times between
    /// pointer events changes no committed state.
    pub fn preview(&self, lkey: LayKey, shape: &ShapeMatrix, hover: Cell) -> Result<Preview> {
        let (layout, cdef) = self.layout_and_def(lkey)?;
        let origin = targeting::anchor_origin(shape, hover);
        Ok(Preview {
            origin,
            cells: shape.occupied_cells(origin).collect(),
            valid: collision::can_place(
                &cdef.footprint,
                &layout.placed_items,
                shape,
                origin,
                None,
            ),
        })
    }

    /// Repacks a layout from scratch with the first-fit-decreasing
    /// heuristic. The layout's item list is replaced wholesale with the
    /// placed set; items that fit nowhere in any allowed orientation are
    /// returned to the caller instead of being silently discarded.
    pub fn auto_sort(&mut self, lkey: LayKey, config: &SortConfig) -> Result<Vec<PlacedItem>> {
        let (layout, cdef) = self.layout_and_def(lkey)?;
        let items = layout.placed_items.values().cloned().collect_vec();
        let n_items = items.len();

        let PackResult { placed, overflow } =
            autopack::pack(items, &self.catalog, &cdef.footprint, config);

        let mut placed_items = SlotMap::with_key();
        for item in placed {
            placed_items.insert(item);
        }
        self.layouts[lkey].placed_items = placed_items;

        info!(
            "[AUTOSORT] repacked layout {lkey:?}: {}/{} items placed, {} overflowed",
            n_items - overflow.len(),
            n_items,
            overflow.len()
        );
        debug_assert!(assertions::layout_is_feasible(
            &self.layouts[lkey],
            &self.catalog
        ));
        Ok(overflow)
    }

    /// Deletes an item definition. Cascades: every instance referencing it
    /// is removed from every layout. Destructive; the authoring collaborator
    /// confirms before invoking.
    pub fn remove_item_def(&mut self, def_id: usize) {
        self.catalog.item_defs.retain(|def| def.id != def_id);
        for layout in self.layouts.values_mut() {
            layout.placed_items.retain(|_, pi| pi.def_id != def_id);
        }
        debug_assert!(assertions::references_resolve(self));
    }

    /// Deletes a container definition. Cascades: every layout of it is
    /// despawned along with its items.
    pub fn remove_container_def(&mut self, def_id: usize) {
        self.catalog.container_defs.retain(|def| def.id != def_id);
        self.layouts.retain(|_, layout| layout.def_id != def_id);
        debug_assert!(assertions::references_resolve(self));
    }

    /// Sum of the definition weights of a layout's items.
    pub fn current_weight(&self, lkey: LayKey) -> Result<f32> {
        let layout = self.layouts.get(lkey).context("layout key is stale")?;
        Ok(layout.total_weight(&self.catalog))
    }

    /// Whether a layout exceeds its definition's weight capacity. Advisory
    /// display data: an overweight container still accepts placements.
    pub fn is_overweight(&self, lkey: LayKey) -> Result<bool> {
        let (layout, cdef) = self.layout_and_def(lkey)?;
        Ok(match cdef.max_weight {
            Some(max_weight) => layout.total_weight(&self.catalog) > max_weight,
            None => false,
        })
    }
}

/// Outcome of [`Inventory::try_commit`].
#[derive(Debug)]
pub enum CommitOutcome {
    /// The item was appended to the layout
    Placed(PItemKey),
    /// The placement was illegal; the item is handed back to the caller
    Rejected(PlacedItem),
}

/// Transient preview for the cell currently under the pointer. Affects no
/// stored state.
#[derive(Clone, Debug)]
pub struct Preview {
    /// Placement origin the hover cell resolves to
    pub origin: Cell,
    /// Cells the shape would occupy
    pub cells: Vec<Cell>,
    /// Whether committing here would succeed
    pub valid: bool,
}
