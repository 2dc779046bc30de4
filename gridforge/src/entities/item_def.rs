use serde::{Deserialize, Serialize};

use crate::geometry::ShapeMatrix;

/// Reusable item template. Instances reference it by id and never embed it;
/// deleting a definition cascades to every instance
/// (see [`Inventory::remove_item_def`](crate::entities::Inventory::remove_item_def)).
#[derive(Clone, Debug)]
pub struct ItemDef {
    pub id: usize,
    pub name: String,
    /// Silhouette before any rotation or flip is applied
    pub base_shape: ShapeMatrix,
    /// Advisory weight, summed per container and compared against its
    /// capacity for display purposes only
    pub weight: f32,
    /// Fill color (hex) used when no image asset is attached
    pub color: String,
    /// Optional image overlay, opaque to the engine
    pub image: Option<ImageAsset>,
}

/// Display metadata for an item's image overlay. The engine never interprets
/// it; it only survives the save/load round-trip intact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Reference to the image source (path, URL or data blob)
    pub source: String,
    /// Offset of the image relative to the grid, in display units
    #[serde(default)]
    pub offset: (f32, f32),
    /// Base width of the image in display units
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Viewport pan applied on top of the offset
    #[serde(default)]
    pub pan: (f32, f32),
    #[serde(default = "default_zoom")]
    pub zoom: f32,
}

fn default_scale() -> f32 {
    100.0
}

fn default_zoom() -> f32 {
    1.0
}
