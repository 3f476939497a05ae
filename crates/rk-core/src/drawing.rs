use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind, Position};
use crate::palette::ColorSlot;
use crate::world::World;

/// The character that marks a filled pixel.
pub const FILLED: char = '1';

/// Which of a drawing's two animation frames to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    /// The frame shown first, and the only frame of a still drawing.
    First,
    /// The alternate frame of an animated drawing.
    Second,
}

/// Pixel grids shared by tiles, sprites, and items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawing {
    /// Rows of single-character cells; `'1'` is filled.
    pub frame1: Vec<Vec<char>>,
    /// The alternate frame, empty unless the drawing is animated.
    pub frame2: Vec<Vec<char>>,
    /// Set when the source had a `>` frame separator.
    pub is_animated: bool,
}

impl Drawing {
    /// Build a drawing from its frame rows. `frame2` is `None` for a still
    /// drawing.
    pub fn new(frame1: Vec<Vec<char>>, frame2: Option<Vec<Vec<char>>>) -> Self {
        let is_animated = frame2.is_some();
        Self {
            frame1,
            frame2: frame2.unwrap_or_default(),
            is_animated,
        }
    }

    /// Width of the first frame, in pixels.
    pub fn width(&self) -> usize {
        self.frame1.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Height of the first frame, in pixels.
    pub fn height(&self) -> usize {
        self.frame1.len()
    }

    fn rows(&self, frame: Frame) -> &[Vec<char>] {
        match frame {
            Frame::First => &self.frame1,
            Frame::Second => &self.frame2,
        }
    }

    /// The raw cell of a frame, if the frame is that large.
    pub fn cell(&self, frame: Frame, x: usize, y: usize) -> Option<char> {
        self.rows(frame).get(y)?.get(x).copied()
    }

    /// Whether a frame has a filled pixel at `(x, y)`.
    pub fn is_filled(&self, frame: Frame, x: usize, y: usize) -> bool {
        self.cell(frame, x, y) == Some(FILLED)
    }

    /// Whether every row of both frames has the same length.
    pub fn is_rectangular(&self) -> bool {
        let uniform = |rows: &[Vec<char>]| rows.windows(2).all(|w| w[0].len() == w[1].len());
        uniform(&self.frame1) && uniform(&self.frame2)
    }

    /// Whether the two frames have the same rows and columns. Always true
    /// for a still drawing.
    pub fn frames_align(&self) -> bool {
        if !self.is_animated {
            return true;
        }
        self.frame1.len() == self.frame2.len()
            && self
                .frame1
                .iter()
                .zip(&self.frame2)
                .all(|(a, b)| a.len() == b.len())
    }
}

/// A background drawing referenced by id from room grids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Tile id, matched against room grid tokens.
    pub id: String,
    /// The tile's pixels.
    pub drawing: Drawing,
    /// Whether the player is blocked by this tile.
    pub is_wall: bool,
}

/// A drawing that declares where it stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    /// Sprite id.
    pub id: String,
    /// The sprite's pixels.
    pub drawing: Drawing,
    /// Room the sprite stands in.
    pub room_id: Option<String>,
    /// Cell the sprite stands on.
    pub position: Option<Position>,
    /// Dialog shown when the player talks to the sprite.
    pub dialog_id: Option<String>,
}

impl Sprite {
    /// Whether the sprite stands on the given cell of the given room.
    pub fn is_at(&self, room_id: &str, position: Position) -> bool {
        self.room_id.as_deref() == Some(room_id) && self.position == Some(position)
    }
}

/// A drawing placed by rooms through their item placements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item id, matched against room item placements.
    pub id: String,
    /// The item's pixels.
    pub drawing: Drawing,
    /// Optional display name.
    pub name: Option<String>,
    /// Dialog shown when the item is picked up.
    pub dialog_id: Option<String>,
}

impl Entity for Tile {
    const KIND: EntityKind = EntityKind::Tile;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(world: &World) -> &[Self] {
        world.tiles()
    }
}

impl Entity for Sprite {
    const KIND: EntityKind = EntityKind::Sprite;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(world: &World) -> &[Self] {
        world.sprites()
    }
}

impl Entity for Item {
    const KIND: EntityKind = EntityKind::Item;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(world: &World) -> &[Self] {
        world.items()
    }
}

/// Any drawing-kind entity, borrowed from a world.
///
/// Draw-time dispatch is over this closed set: a sprite beats an item,
/// which beats a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawable<'w> {
    /// A tile from a room grid.
    Tile(&'w Tile),
    /// A sprite standing on the cell.
    Sprite(&'w Sprite),
    /// An item placed on the cell.
    Item(&'w Item),
}

impl<'w> Drawable<'w> {
    /// The shared pixel payload.
    pub fn drawing(&self) -> &'w Drawing {
        match self {
            Self::Tile(t) => &t.drawing,
            Self::Sprite(s) => &s.drawing,
            Self::Item(i) => &i.drawing,
        }
    }

    /// The id of the underlying entity.
    pub fn id(&self) -> &'w str {
        match self {
            Self::Tile(t) => &t.id,
            Self::Sprite(s) => &s.id,
            Self::Item(i) => &i.id,
        }
    }

    /// The kind of the underlying entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Tile(_) => EntityKind::Tile,
            Self::Sprite(_) => EntityKind::Sprite,
            Self::Item(_) => EntityKind::Item,
        }
    }

    /// Sprites and items occupy a cell; tiles only sit under it.
    pub fn is_occupant(&self) -> bool {
        !matches!(self, Self::Tile(_))
    }

    /// The palette slot used for this drawable's foreground.
    pub fn color_slot(&self) -> ColorSlot {
        if self.is_occupant() {
            ColorSlot::Occupant
        } else {
            ColorSlot::Tile
        }
    }
}
