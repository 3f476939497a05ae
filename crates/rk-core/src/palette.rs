use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{Color, Entity, EntityKind};
use crate::world::World;

/// The role a palette color plays when a room is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSlot {
    /// Color 0: fills the whole room behind every cell.
    Background,
    /// Color 1: foreground of a cell that only shows its tile.
    Tile,
    /// Color 2: foreground of a cell occupied by a sprite or item.
    Occupant,
}

impl ColorSlot {
    /// Index of this slot in a palette's color list.
    pub fn index(self) -> usize {
        match self {
            Self::Background => 0,
            Self::Tile => 1,
            Self::Occupant => 2,
        }
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Background => "background",
            Self::Tile => "tile",
            Self::Occupant => "occupant",
        };
        write!(f, "{name} (color {})", self.index())
    }
}

/// An ordered list of colors. Position in the list is meaningful, see
/// [`ColorSlot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Palette id, referenced by rooms.
    pub id: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Colors in declaration order.
    pub colors: Vec<Color>,
}

impl Palette {
    /// The color filling the given slot, if the palette is long enough.
    pub fn color(&self, slot: ColorSlot) -> Option<Color> {
        self.colors.get(slot.index()).copied()
    }
}

impl Entity for Palette {
    const KIND: EntityKind = EntityKind::Palette;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(world: &World) -> &[Self] {
        world.palettes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_index_into_colors() {
        let palette = Palette {
            id: "0".into(),
            name: None,
            colors: vec![Color::new(0, 0, 0), Color::new(1, 1, 1), Color::new(2, 2, 2)],
        };
        assert_eq!(palette.color(ColorSlot::Background), Some(Color::new(0, 0, 0)));
        assert_eq!(palette.color(ColorSlot::Occupant), Some(Color::new(2, 2, 2)));
    }

    #[test]
    fn short_palette_lacks_upper_slots() {
        let palette = Palette {
            id: "0".into(),
            name: None,
            colors: vec![Color::new(9, 9, 9)],
        };
        assert!(palette.color(ColorSlot::Background).is_some());
        assert!(palette.color(ColorSlot::Tile).is_none());
    }
}
