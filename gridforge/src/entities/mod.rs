mod catalog;
mod container_def;
mod inventory;
mod item_def;
mod layout;
mod placed_item;

#[doc(inline)]
pub use catalog::Catalog;
#[doc(inline)]
pub use container_def::ContainerDef;
#[doc(inline)]
pub use inventory::{CommitOutcome, Inventory, LayKey, Preview};
#[doc(inline)]
pub use item_def::{ImageAsset, ItemDef};
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use placed_item::{PItemKey, PlacedItem};
