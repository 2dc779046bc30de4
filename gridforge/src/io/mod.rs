pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::{export, export_placed_item, export_shape};
#[doc(inline)]
pub use import::{import, import_shape};
