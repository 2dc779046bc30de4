use serde::{Deserialize, Serialize};

use gridforge::io::ext_repr::{ExtPlacedItem, ExtSave};

use crate::config::FFDConfig;

/// Output of an FFD run: the repacked save payload, the items that no
/// longer fit anywhere, and run statistics.
#[derive(Serialize, Deserialize)]
pub struct FFDOutput {
    pub save: ExtSave,
    /// Items that fit nowhere, per active container (index-aligned with
    /// `save.active_containers`), with their pre-pack placement state
    pub overflow: Vec<Vec<ExtPlacedItem>>,
    pub run_time_ms: u64,
    pub config: FFDConfig,
}
