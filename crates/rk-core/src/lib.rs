//! Core types for roomkit: palettes, rooms, drawings, and the world model.
//!
//! This crate defines the data model that a game document loads into. It is
//! independent of the text format: you can build a [`World`] by hand or
//! deserialize one from JSON. Cross-entity references are plain id strings,
//! resolved on demand through the lookups on [`World`].

/// Tile, sprite, and item drawings with their animation frames.
pub mod drawing;
/// Entity kinds, the shared [`Entity`] trait, positions, and colors.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Color palettes.
pub mod palette;
/// Rooms: tile grids plus item, ending, and exit placements.
pub mod room;
/// Text-only entities: dialogs, endings, and variables.
pub mod text;
/// The world aggregate that owns every entity collection.
pub mod world;

/// Re-export drawing types.
pub use drawing::{Drawable, Drawing, FILLED, Frame, Item, Sprite, Tile};
/// Re-export core entity types.
pub use entity::{AnyEntity, Color, Entity, EntityKind, Position};
/// Re-export error types.
pub use error::{RkError, RkResult};
/// Re-export palette types.
pub use palette::{ColorSlot, Palette};
/// Re-export room types.
pub use room::{EndingPlacement, Exit, ItemPlacement, Room};
/// Re-export text entity types.
pub use text::{Dialog, Ending, Variable};
/// Re-export the world model.
pub use world::World;
