use serde::{Deserialize, Serialize};

use crate::autopack::SortConfig;
use crate::entities::ImageAsset;

/// External representation of a full save payload. Everything a persistence
/// collaborator must store to restore the engine without loss of placement
/// state.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSave {
    pub item_defs: Vec<ExtItemDef>,
    pub container_defs: Vec<ExtContainerDef>,
    pub active_containers: Vec<ExtContainerInstance>,
    #[serde(default)]
    pub sort_config: SortConfig,
    #[serde(default)]
    pub display_settings: ExtDisplaySettings,
}

/// External representation of an [`ItemDef`](crate::entities::ItemDef).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtItemDef {
    /// Unique identifier of the item definition
    pub id: u64,
    pub name: String,
    /// Base silhouette, before any rotation or flip
    pub shape: ExtShape,
    pub weight: f32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<ImageAsset>,
}

/// External representation of a [`ContainerDef`](crate::entities::ContainerDef).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtContainerDef {
    /// Unique identifier of the container definition
    pub id: u64,
    pub name: String,
    /// Footprint; 0-cells are holes
    pub shape: ExtShape,
    /// Weight capacity; unlimited if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_weight: Option<f32>,
}

/// External representation of a [`Layout`](crate::entities::Layout):
/// one live container and the items placed in it.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtContainerInstance {
    pub def_id: u64,
    pub items: Vec<ExtPlacedItem>,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlacedItem {
    pub def_id: u64,
    /// Origin of the bounding box, container-local
    pub x: i32,
    pub y: i32,
    /// Current shape with rotation/flip applied
    pub shape: ExtShape,
    /// Clockwise quarter-turns applied (0..=3)
    pub rotation: u8,
}

/// Shape as rows of 0/1 cells.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtShape(pub Vec<Vec<u8>>);

/// Visual settings of the rendering collaborator. The engine never
/// interprets them; they only ride along in the save payload.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct ExtDisplaySettings {
    pub thickness: f32,
    pub color: String,
    pub opacity: f32,
    pub grid_scale: f32,
    pub image_fill_color: String,
    pub image_fill_opacity: f32,
}

impl Default for ExtDisplaySettings {
    fn default() -> Self {
        Self {
            thickness: 2.0,
            color: "#000000".to_string(),
            opacity: 0.5,
            grid_scale: 40.0,
            image_fill_color: "#6366f1".to_string(),
            image_fill_opacity: 0.0,
        }
    }
}
