use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::world::World;

/// A block of text shown when the player talks to a sprite or picks up an
/// item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    /// Dialog id, referenced by sprites and items.
    pub id: String,
    /// Body text; multiple lines are joined with `\n`.
    pub text: String,
}

/// A block of text shown when the player reaches an ending placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ending {
    /// Ending id, referenced by room ending placements.
    pub id: String,
    /// Body text; multiple lines are joined with `\n`.
    pub text: String,
}

/// A named string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable id.
    pub id: String,
    /// The value, empty when the chunk carried none.
    pub value: String,
}

impl Entity for Dialog {
    const KIND: EntityKind = EntityKind::Dialog;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(world: &World) -> &[Self] {
        world.dialogs()
    }
}

impl Entity for Ending {
    const KIND: EntityKind = EntityKind::Ending;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(world: &World) -> &[Self] {
        world.endings()
    }
}

impl Entity for Variable {
    const KIND: EntityKind = EntityKind::Variable;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(world: &World) -> &[Self] {
        world.variables()
    }
}
