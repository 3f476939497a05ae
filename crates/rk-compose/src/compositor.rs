use rk_core::{
    Color, ColorSlot, Drawable, Drawing, FILLED, Frame, Item, Palette, Position, Room, Sprite,
    Tile, World,
};

use crate::config::ComposeConfig;
use crate::error::{ComposeError, ComposeResult};
use crate::tree::{Group, Node, Rect, Scene};

/// Everything that could be drawn on one room cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'w> {
    /// The cell's grid coordinate.
    pub position: Position,
    /// The tile named by the grid token, if it resolves.
    pub tile: Option<&'w Tile>,
    /// The first sprite standing on the cell.
    pub sprite: Option<&'w Sprite>,
    /// The item the room places on the cell, if it resolves.
    pub item: Option<&'w Item>,
}

impl<'w> Cell<'w> {
    /// The one drawable that wins the cell: sprite, then item, then tile.
    pub fn drawable(&self) -> Option<Drawable<'w>> {
        self.sprite
            .map(Drawable::Sprite)
            .or_else(|| self.item.map(Drawable::Item))
            .or_else(|| self.tile.map(Drawable::Tile))
    }
}

/// Composes rooms of a world into visual trees.
///
/// Borrows the world read-only, so any number of compositors can work on
/// one world at once.
#[derive(Debug, Clone)]
pub struct Compositor<'w> {
    world: &'w World,
    config: ComposeConfig,
}

impl<'w> Compositor<'w> {
    /// A compositor with the default configuration.
    pub fn new(world: &'w World) -> Self {
        Self::with_config(world, ComposeConfig::default())
    }

    /// A compositor with an explicit configuration.
    pub fn with_config(world: &'w World, config: ComposeConfig) -> Self {
        Self { world, config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Resolve the occupants of a cell. Dangling references resolve to
    /// nothing.
    pub fn resolve_cell(&self, room: &Room, position: Position) -> Cell<'w> {
        let world = self.world;
        Cell {
            position,
            tile: room.tile_id_at(position).and_then(|id| world.get::<Tile>(id)),
            sprite: world.sprite_at(&room.id, position),
            item: world.item_at(room, position),
        }
    }

    /// The palette a room draws with. Unlike other references, a room
    /// without a resolvable palette cannot be drawn at all.
    pub fn resolve_palette(&self, room: &Room) -> ComposeResult<&'w Palette> {
        let Some(palette_id) = room.palette_id.as_deref() else {
            tracing::warn!(room = %room.id, "room has no palette");
            return Err(ComposeError::NoPalette {
                room_id: room.id.clone(),
            });
        };
        self.world.get::<Palette>(palette_id).ok_or_else(|| {
            tracing::warn!(room = %room.id, palette = palette_id, "palette not found");
            ComposeError::PaletteNotFound {
                room_id: room.id.clone(),
                palette_id: palette_id.to_string(),
            }
        })
    }

    /// Compose a room looked up by id.
    pub fn compose_room_by_id(&self, room_id: &str) -> ComposeResult<Scene> {
        let room = self
            .world
            .get::<Room>(room_id)
            .ok_or_else(|| ComposeError::RoomNotFound(room_id.to_string()))?;
        self.compose_room(room)
    }

    /// Compose a room.
    ///
    /// The tree is a root group holding a background rectangle that covers
    /// the whole grid, followed by one group per drawn cell, translated to
    /// the cell's origin. A cell with nothing that resolves draws nothing,
    /// leaving the background visible. Palette colors are only required
    /// once a cell actually needs them.
    pub fn compose_room(&self, room: &Room) -> ComposeResult<Scene> {
        self.config.validate()?;
        let palette = self.resolve_palette(room)?;
        let tile_size = self.config.tile_size;

        let width = to_units(room.width(), tile_size);
        let height = to_units(room.height(), tile_size);
        let background = slot_color(palette, ColorSlot::Background)?;

        let mut root = Group::at(0, 0);
        root.children
            .push(Rect::new(0, 0, width, height, background).into());

        for (position, token) in room.cells() {
            let cell = self.resolve_cell(room, position);
            let Some(drawable) = cell.drawable() else {
                tracing::trace!(room = %room.id, %position, token, "empty cell");
                continue;
            };
            tracing::trace!(
                room = %room.id,
                %position,
                kind = %drawable.kind(),
                id = drawable.id(),
                "drawing cell"
            );

            let color = slot_color(palette, drawable.color_slot())?;
            let mut group = self.compose_drawing(drawable.drawing(), color);
            group.x = cell_offset(position.x, tile_size);
            group.y = cell_offset(position.y, tile_size);
            root.children.push(group.into());
        }

        tracing::debug!(
            room = %room.id,
            palette = %palette.id,
            cells = room.width() * room.height(),
            nodes = root.children.len(),
            "composed room"
        );

        Ok(Scene {
            id: room.id.clone(),
            width,
            height,
            frame_duration_ms: self.config.frame_duration_ms,
            root: root.into(),
        })
    }

    /// Compose a single drawable on its own tile-sized canvas, using the
    /// palette colors it would get inside a room.
    pub fn compose_preview(
        &self,
        drawable: Drawable<'_>,
        palette: &Palette,
    ) -> ComposeResult<Scene> {
        self.config.validate()?;
        let size = self.config.tile_size;
        let background = slot_color(palette, ColorSlot::Background)?;
        let color = slot_color(palette, drawable.color_slot())?;

        let mut root = Group::at(0, 0);
        root.children
            .push(Rect::new(0, 0, size, size, background).into());
        root.children
            .push(self.compose_drawing(drawable.drawing(), color).into());

        tracing::debug!(kind = %drawable.kind(), id = drawable.id(), "composed preview");

        Ok(Scene {
            id: drawable.id().to_string(),
            width: size,
            height: size,
            frame_duration_ms: self.config.frame_duration_ms,
            root: root.into(),
        })
    }

    /// Compose a drawing's filled pixels at the origin.
    ///
    /// Still drawings emit one rectangle per filled pixel of frame 1. In an
    /// animated drawing, a pixel that differs between the frames emits a
    /// frame-1 rectangle if it is filled in frame 1 and a frame-2
    /// rectangle if it is filled in frame 2; choosing which one is visible
    /// is left to the emitter.
    pub fn compose_drawing(&self, drawing: &Drawing, color: Color) -> Group {
        let pixel = self.config.pixel_size;
        let mut group = Group::at(0, 0);

        for (y, row) in drawing.frame1.iter().enumerate() {
            for (x, &first) in row.iter().enumerate() {
                let rect = Rect::new(to_units(x, pixel), to_units(y, pixel), pixel, pixel, color);
                let second = drawing.cell(Frame::Second, x, y);

                if drawing.is_animated && second != Some(first) {
                    if first == FILLED {
                        group.children.push(rect.in_frame(Frame::First).into());
                    }
                    if second == Some(FILLED) {
                        group.children.push(rect.in_frame(Frame::Second).into());
                    }
                } else if first == FILLED {
                    group.children.push(rect.into());
                }
            }
        }

        group
    }
}

fn slot_color(palette: &Palette, slot: ColorSlot) -> ComposeResult<Color> {
    palette.color(slot).ok_or_else(|| ComposeError::MissingColor {
        palette_id: palette.id.clone(),
        slot,
    })
}

fn to_units(count: usize, size: u32) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(size)
}

/// Origin of a grid cell; clamps at the edge of the unit space.
fn cell_offset(index: i32, size: u32) -> u32 {
    index.unsigned_abs().saturating_mul(size)
}
