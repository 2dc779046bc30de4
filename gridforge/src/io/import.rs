use anyhow::{Context, Result, bail, ensure};

use crate::autopack::SortConfig;
use crate::entities::{Catalog, CommitOutcome, ContainerDef, Inventory, ItemDef, PlacedItem};
use crate::geometry::{Cell, ShapeMatrix};
use crate::io::ext_repr::{ExtDisplaySettings, ExtSave, ExtShape};
use crate::util::assertions;

/// Imports a save payload into the engine.
///
/// Fails on malformed shapes (InvalidShape), dangling definition references
/// (InvalidReference), out-of-range rotation states and infeasible restored
/// placements. On success every layout satisfies the placement invariant.
pub fn import(ext: &ExtSave) -> Result<(Inventory, SortConfig, ExtDisplaySettings)> {
    let item_defs = ext
        .item_defs
        .iter()
        .map(|ext_def| {
            let base_shape = import_shape(&ext_def.shape).with_context(|| {
                format!("InvalidShape: item definition {} ({})", ext_def.id, ext_def.name)
            })?;
            Ok(ItemDef {
                id: ext_def.id as usize,
                name: ext_def.name.clone(),
                base_shape,
                weight: ext_def.weight,
                color: ext_def.color.clone(),
                image: ext_def.image.clone(),
            })
        })
        .collect::<Result<Vec<ItemDef>>>()?;

    let container_defs = ext
        .container_defs
        .iter()
        .map(|ext_def| {
            let footprint = import_shape(&ext_def.shape).with_context(|| {
                format!(
                    "InvalidShape: container definition {} ({})",
                    ext_def.id, ext_def.name
                )
            })?;
            Ok(ContainerDef {
                id: ext_def.id as usize,
                name: ext_def.name.clone(),
                footprint,
                max_weight: ext_def.max_weight,
            })
        })
        .collect::<Result<Vec<ContainerDef>>>()?;

    let catalog = Catalog::new(item_defs, container_defs)?;
    let mut inventory = Inventory::new(catalog);

    for (i, ext_layout) in ext.active_containers.iter().enumerate() {
        let lkey = inventory
            .spawn_layout(ext_layout.def_id as usize)
            .with_context(|| format!("InvalidReference: active container {i}"))?;

        for ext_pi in &ext_layout.items {
            ensure!(
                ext_pi.rotation < 4,
                "rotation state out of range: {}",
                ext_pi.rotation
            );
            ensure!(
                inventory.catalog.item_def(ext_pi.def_id as usize).is_some(),
                "InvalidReference: item definition {} not in catalog",
                ext_pi.def_id
            );

            let item = PlacedItem {
                def_id: ext_pi.def_id as usize,
                origin: Cell(ext_pi.x, ext_pi.y),
                shape: import_shape(&ext_pi.shape)
                    .with_context(|| format!("InvalidShape: placed item in active container {i}"))?,
                rotation: ext_pi.rotation,
            };

            match inventory.try_commit(lkey, item, Cell(ext_pi.x, ext_pi.y))? {
                CommitOutcome::Placed(_) => {}
                CommitOutcome::Rejected(item) => bail!(
                    "infeasible placement for item definition {} at {} in active container {i}",
                    item.def_id,
                    item.origin
                ),
            }
        }
    }

    debug_assert!(assertions::references_resolve(&inventory));
    debug_assert!(assertions::inventory_is_feasible(&inventory));

    Ok((inventory, ext.sort_config, ext.display_settings.clone()))
}

/// Converts external 0/1 rows into a [`ShapeMatrix`], enforcing
/// rectangularity and non-emptiness.
pub fn import_shape(ext: &ExtShape) -> Result<ShapeMatrix> {
    ShapeMatrix::new(
        ext.0
            .iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect(),
    )
}
