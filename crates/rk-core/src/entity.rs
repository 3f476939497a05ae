use std::fmt;

use serde::{Deserialize, Serialize};

use crate::drawing::{Item, Sprite, Tile};
use crate::error::{RkError, RkResult};
use crate::palette::Palette;
use crate::room::Room;
use crate::text::{Dialog, Ending, Variable};
use crate::world::World;

/// The kind of an entity. Each kind owns one collection in the [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A list of RGB colors.
    Palette,
    /// A grid of tiles with placed items, endings, and exits.
    Room,
    /// A background drawing placed by room grids.
    Tile,
    /// A drawing that declares its own room and position.
    Sprite,
    /// A drawing placed by the room that holds it.
    Item,
    /// A block of text shown to the player.
    Dialog,
    /// A block of text that finishes the game.
    Ending,
    /// A named string value.
    Variable,
}

impl EntityKind {
    /// Every kind, in the order the world stores its collections.
    pub const ALL: [EntityKind; 8] = [
        Self::Palette,
        Self::Room,
        Self::Tile,
        Self::Sprite,
        Self::Item,
        Self::Dialog,
        Self::Ending,
        Self::Variable,
    ];

    /// The header token that opens a chunk of this kind.
    pub fn header(self) -> &'static str {
        match self {
            Self::Palette => "PAL",
            Self::Room => "ROOM",
            Self::Tile => "TIL",
            Self::Sprite => "SPR",
            Self::Item => "ITM",
            Self::Dialog => "DLG",
            Self::Ending => "END",
            Self::Variable => "VAR",
        }
    }

    /// Look up a kind by its chunk header token (`PAL`, `ROOM`, ...).
    pub fn from_header(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.header() == token)
    }

    /// Parse a kind from a user-facing name, accepting the singular name,
    /// the plural, or the header token in any case.
    pub fn parse(s: &str) -> RkResult<Self> {
        let lower = s.to_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string() == singular || kind.header().eq_ignore_ascii_case(&lower))
            .ok_or_else(|| RkError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Palette => "palette",
            Self::Room => "room",
            Self::Tile => "tile",
            Self::Sprite => "sprite",
            Self::Item => "item",
            Self::Dialog => "dialog",
            Self::Ending => "ending",
            Self::Variable => "variable",
        };
        f.write_str(name)
    }
}

/// A grid coordinate, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, counted from the left edge.
    pub x: i32,
    /// Row, counted from the top edge.
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Parse an `x,y` token. Anything other than exactly two integers is
    /// absent, never zero.
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.split(',');
        let x = parts.next()?.trim().parse().ok()?;
        let y = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse an `r,g,b` row. Rows without exactly three byte-sized fields
    /// are rejected.
    pub fn parse(row: &str) -> Option<Self> {
        let fields: Vec<&str> = row.split(',').collect();
        let [r, g, b] = fields.as_slice() else {
            return None;
        };
        Some(Self {
            r: r.trim().parse().ok()?,
            g: g.trim().parse().ok()?,
            b: b.trim().parse().ok()?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Shared capability of every entity kind: a stable id and a home
/// collection in the [`World`].
pub trait Entity: Sized {
    /// The kind this type represents.
    const KIND: EntityKind;

    /// The entity's id token. Uniqueness within a kind is not enforced.
    fn id(&self) -> &str;

    /// The world collection that holds entities of this type.
    fn collection(world: &World) -> &[Self];
}

/// An entity of any kind, as produced by the loader before it is filed into
/// its world collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyEntity {
    /// A palette.
    Palette(Palette),
    /// A room.
    Room(Room),
    /// A tile.
    Tile(Tile),
    /// A sprite.
    Sprite(Sprite),
    /// An item.
    Item(Item),
    /// A dialog.
    Dialog(Dialog),
    /// An ending.
    Ending(Ending),
    /// A variable.
    Variable(Variable),
}

impl AnyEntity {
    /// The kind of the wrapped entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Palette(_) => EntityKind::Palette,
            Self::Room(_) => EntityKind::Room,
            Self::Tile(_) => EntityKind::Tile,
            Self::Sprite(_) => EntityKind::Sprite,
            Self::Item(_) => EntityKind::Item,
            Self::Dialog(_) => EntityKind::Dialog,
            Self::Ending(_) => EntityKind::Ending,
            Self::Variable(_) => EntityKind::Variable,
        }
    }

    /// The id of the wrapped entity.
    pub fn id(&self) -> &str {
        match self {
            Self::Palette(e) => e.id(),
            Self::Room(e) => e.id(),
            Self::Tile(e) => e.id(),
            Self::Sprite(e) => e.id(),
            Self::Item(e) => e.id(),
            Self::Dialog(e) => e.id(),
            Self::Ending(e) => e.id(),
            Self::Variable(e) => e.id(),
        }
    }
}

macro_rules! impl_into_any {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for AnyEntity {
                fn from(entity: $ty) -> Self {
                    Self::$ty(entity)
                }
            }
        )*
    };
}

impl_into_any!(Palette, Room, Tile, Sprite, Item, Dialog, Ending, Variable);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_header() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_header(kind.header()), Some(kind));
        }
        assert_eq!(EntityKind::from_header("FOO"), None);
    }

    #[test]
    fn kind_parse_accepts_names_plurals_and_headers() {
        assert_eq!(EntityKind::parse("room").unwrap(), EntityKind::Room);
        assert_eq!(EntityKind::parse("Tiles").unwrap(), EntityKind::Tile);
        assert_eq!(EntityKind::parse("spr").unwrap(), EntityKind::Sprite);
        assert!(EntityKind::parse("vehicle").is_err());
    }

    #[test]
    fn position_parses_two_integers() {
        assert_eq!(Position::parse("3,4"), Some(Position::new(3, 4)));
        assert_eq!(Position::parse("-1,0"), Some(Position::new(-1, 0)));
    }

    #[test]
    fn malformed_position_is_absent() {
        assert_eq!(Position::parse("3"), None);
        assert_eq!(Position::parse("3,4,5"), None);
        assert_eq!(Position::parse("a,4"), None);
        assert_eq!(Position::parse(""), None);
    }

    #[test]
    fn color_parse_requires_three_fields() {
        assert_eq!(Color::parse("0,82,204"), Some(Color::new(0, 82, 204)));
        assert_eq!(Color::parse("0,82"), None);
        assert_eq!(Color::parse("0,82,204,1"), None);
        assert_eq!(Color::parse("0,82,999"), None);
    }

    #[test]
    fn color_display_is_parseable() {
        let color = Color::new(128, 159, 255);
        assert_eq!(Color::parse(&color.to_string()), Some(color));
    }
}
