use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::drawing::{Item, Sprite, Tile};
use crate::entity::{AnyEntity, Entity, EntityKind, Position};
use crate::error::{RkError, RkResult};
use crate::palette::Palette;
use crate::room::Room;
use crate::text::{Dialog, Ending, Variable};

/// The world model. Owns one ordered collection per entity kind.
///
/// Entities are appended in document order and never removed. References
/// between entities are id strings; every lookup returns the first entity
/// in its collection whose id matches, and a dangling id simply resolves to
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    palettes: Vec<Palette>,
    rooms: Vec<Room>,
    tiles: Vec<Tile>,
    sprites: Vec<Sprite>,
    items: Vec<Item>,
    dialogs: Vec<Dialog>,
    endings: Vec<Ending>,
    variables: Vec<Variable>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// File an entity at the end of its kind's collection.
    pub fn add(&mut self, entity: impl Into<AnyEntity>) {
        match entity.into() {
            AnyEntity::Palette(e) => self.palettes.push(e),
            AnyEntity::Room(e) => self.rooms.push(e),
            AnyEntity::Tile(e) => self.tiles.push(e),
            AnyEntity::Sprite(e) => self.sprites.push(e),
            AnyEntity::Item(e) => self.items.push(e),
            AnyEntity::Dialog(e) => self.dialogs.push(e),
            AnyEntity::Ending(e) => self.endings.push(e),
            AnyEntity::Variable(e) => self.variables.push(e),
        }
    }

    // -----------------------------------------------------------------------
    // Collections
    // -----------------------------------------------------------------------

    /// All palettes, in document order.
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// All rooms, in document order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All tiles, in document order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// All sprites, in document order.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// All items, in document order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All dialogs, in document order.
    pub fn dialogs(&self) -> &[Dialog] {
        &self.dialogs
    }

    /// All endings, in document order.
    pub fn endings(&self) -> &[Ending] {
        &self.endings
    }

    /// All variables, in document order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The collection of any entity type.
    pub fn all<T: Entity>(&self) -> &[T] {
        T::collection(self)
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Find the first entity of type `T` with the given id.
    pub fn get<T: Entity>(&self, id: &str) -> Option<&T> {
        T::collection(self).iter().find(|e| e.id() == id)
    }

    /// Like [`World::get`], but a missing id is an error.
    pub fn require<T: Entity>(&self, id: &str) -> RkResult<&T> {
        self.get(id).ok_or_else(|| RkError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })
    }

    /// The palette a room references, if the reference resolves.
    pub fn palette_of(&self, room: &Room) -> Option<&Palette> {
        room.palette_id.as_deref().and_then(|id| self.get(id))
    }

    /// Sprites that declare themselves inside a room.
    pub fn sprites_in_room<'a>(&'a self, room_id: &'a str) -> impl Iterator<Item = &'a Sprite> {
        self.sprites
            .iter()
            .filter(move |s| s.room_id.as_deref() == Some(room_id))
    }

    /// The first sprite standing on a cell of a room.
    pub fn sprite_at(&self, room_id: &str, position: Position) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.is_at(room_id, position))
    }

    /// The item a room places on a cell, resolved by id.
    pub fn item_at(&self, room: &Room, position: Position) -> Option<&Item> {
        room.item_at(position)
            .and_then(|placement| self.get(&placement.item_id))
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of entities of a kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Palette => self.palettes.len(),
            EntityKind::Room => self.rooms.len(),
            EntityKind::Tile => self.tiles.len(),
            EntityKind::Sprite => self.sprites.len(),
            EntityKind::Item => self.items.len(),
            EntityKind::Dialog => self.dialogs.len(),
            EntityKind::Ending => self.endings.len(),
            EntityKind::Variable => self.variables.len(),
        }
    }

    /// Total number of entities across all kinds.
    pub fn entity_count(&self) -> usize {
        EntityKind::ALL.into_iter().map(|k| self.count(k)).sum()
    }

    /// Count entities by kind, omitting empty kinds.
    pub fn counts_by_kind(&self) -> HashMap<EntityKind, usize> {
        EntityKind::ALL
            .into_iter()
            .map(|k| (k, self.count(k)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }

    /// Ids of every entity of a kind, in document order.
    pub fn ids(&self, kind: EntityKind) -> Vec<&str> {
        fn ids_of<T: Entity>(items: &[T]) -> Vec<&str> {
            items.iter().map(Entity::id).collect()
        }

        match kind {
            EntityKind::Palette => ids_of(&self.palettes),
            EntityKind::Room => ids_of(&self.rooms),
            EntityKind::Tile => ids_of(&self.tiles),
            EntityKind::Sprite => ids_of(&self.sprites),
            EntityKind::Item => ids_of(&self.items),
            EntityKind::Dialog => ids_of(&self.dialogs),
            EntityKind::Ending => ids_of(&self.endings),
            EntityKind::Variable => ids_of(&self.variables),
        }
    }
}
