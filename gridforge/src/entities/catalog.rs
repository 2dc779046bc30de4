use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::{ContainerDef, ItemDef};

/// The id-to-definition mapping maintained by the authoring collaborator and
/// passed into engine operations as a lookup capability.
///
/// Ids must be unique per definition kind but need not be consecutive:
/// cascading deletion leaves gaps.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub item_defs: Vec<ItemDef>,
    pub container_defs: Vec<ContainerDef>,
}

impl Catalog {
    pub fn new(item_defs: Vec<ItemDef>, container_defs: Vec<ContainerDef>) -> Result<Self> {
        ensure!(
            item_defs.iter().map(|def| def.id).all_unique(),
            "item definition ids must be unique"
        );
        ensure!(
            container_defs.iter().map(|def| def.id).all_unique(),
            "container definition ids must be unique"
        );
        Ok(Self {
            item_defs,
            container_defs,
        })
    }

    pub fn item_def(&self, id: usize) -> Option<&ItemDef> {
        self.item_defs.iter().find(|def| def.id == id)
    }

    pub fn container_def(&self, id: usize) -> Option<&ContainerDef> {
        self.container_defs.iter().find(|def| def.id == id)
    }
}
