use crate::autopack::SortConfig;
use crate::entities::{Inventory, PlacedItem};
use crate::geometry::ShapeMatrix;
use crate::io::ext_repr::{
    ExtContainerDef, ExtContainerInstance, ExtDisplaySettings, ExtItemDef, ExtPlacedItem, ExtSave,
    ExtShape,
};

/// Exports the engine state back out as a save payload. Placement state
/// (origin, current shape, rotation) survives the round-trip losslessly.
pub fn export(
    inventory: &Inventory,
    sort_config: SortConfig,
    display_settings: &ExtDisplaySettings,
) -> ExtSave {
    ExtSave {
        item_defs: inventory
            .catalog
            .item_defs
            .iter()
            .map(|def| ExtItemDef {
                id: def.id as u64,
                name: def.name.clone(),
                shape: export_shape(&def.base_shape),
                weight: def.weight,
                color: def.color.clone(),
                image: def.image.clone(),
            })
            .collect(),
        container_defs: inventory
            .catalog
            .container_defs
            .iter()
            .map(|def| ExtContainerDef {
                id: def.id as u64,
                name: def.name.clone(),
                shape: export_shape(&def.footprint),
                max_weight: def.max_weight,
            })
            .collect(),
        active_containers: inventory
            .layouts
            .values()
            .map(|layout| ExtContainerInstance {
                def_id: layout.def_id as u64,
                items: layout.placed_items.values().map(export_placed_item).collect(),
            })
            .collect(),
        sort_config,
        display_settings: display_settings.clone(),
    }
}

pub fn export_placed_item(pi: &PlacedItem) -> ExtPlacedItem {
    ExtPlacedItem {
        def_id: pi.def_id as u64,
        x: pi.origin.x(),
        y: pi.origin.y(),
        shape: export_shape(&pi.shape),
        rotation: pi.rotation,
    }
}

pub fn export_shape(shape: &ShapeMatrix) -> ExtShape {
    ExtShape(
        shape
            .rows()
            .map(|row| row.iter().map(|&cell| cell as u8).collect())
            .collect(),
    )
}
