use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind, Position};
use crate::world::World;

/// An item placed in a room by the room itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlacement {
    /// Id of the placed item.
    pub item_id: String,
    /// Cell the item sits on; absent when the position token was malformed.
    pub position: Option<Position>,
}

/// An ending triggered when the player steps on a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingPlacement {
    /// Id of the ending to show.
    pub ending_id: String,
    /// Cell that triggers the ending.
    pub position: Option<Position>,
}

/// A passage from a cell of this room into another room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Cell in this room that leads out.
    pub position: Option<Position>,
    /// Id of the destination room.
    pub target_room_id: String,
    /// Cell the player arrives on in the destination room.
    pub enter_position: Option<Position>,
}

/// A grid of tile ids plus everything the room places on it.
///
/// The grid keeps the tokens exactly as written; a token that matches no
/// tile simply draws nothing at composition time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room id, referenced by sprites and exits.
    pub id: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Id of the palette used to draw the room.
    pub palette_id: Option<String>,
    /// Tile id tokens, row by row.
    pub grid: Vec<Vec<String>>,
    /// Items placed by this room.
    pub items: Vec<ItemPlacement>,
    /// Endings placed by this room.
    pub endings: Vec<EndingPlacement>,
    /// Exits leading out of this room.
    pub exits: Vec<Exit>,
}

impl Room {
    /// Number of cells in the widest row.
    pub fn width(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// The tile id token at a cell, if the cell is inside the grid.
    pub fn tile_id_at(&self, position: Position) -> Option<&str> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        self.grid.get(y)?.get(x).map(String::as_str)
    }

    /// Iterate every grid cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &str)> {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, token)| (Position::new(x as i32, y as i32), token.as_str()))
        })
    }

    /// The first item placement on a cell.
    pub fn item_at(&self, position: Position) -> Option<&ItemPlacement> {
        self.items.iter().find(|p| p.position == Some(position))
    }

    /// The first ending placement on a cell.
    pub fn ending_at(&self, position: Position) -> Option<&EndingPlacement> {
        self.endings.iter().find(|p| p.position == Some(position))
    }

    /// The first exit leaving from a cell.
    pub fn exit_at(&self, position: Position) -> Option<&Exit> {
        self.exits.iter().find(|e| e.position == Some(position))
    }

    /// Whether every grid row has the same number of cells.
    pub fn is_rectangular(&self) -> bool {
        self.grid.windows(2).all(|w| w[0].len() == w[1].len())
    }
}

impl Entity for Room {
    const KIND: EntityKind = EntityKind::Room;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(world: &World) -> &[Self] {
        world.rooms()
    }
}
