use std::path::Path;

use rk_compose::{ComposeConfig, Compositor, Scene};
use rk_core::{Drawable, EntityKind, Item, Palette, Sprite, Tile, World};

pub struct RenderArgs<'a> {
    pub id: &'a str,
    pub kind: &'a str,
    pub palette: Option<&'a str>,
    pub tile_size: u32,
    pub output: Option<&'a Path>,
}

pub fn run(file: &Path, args: &RenderArgs<'_>) -> Result<(), String> {
    let world = super::load_file(file)?;
    let kind = EntityKind::parse(args.kind).map_err(|e| e.to_string())?;
    let config = ComposeConfig::default().with_tile_size(args.tile_size);
    let compositor = Compositor::with_config(&world, config);

    let scene = match kind {
        EntityKind::Room => compositor
            .compose_room_by_id(args.id)
            .map_err(|e| e.to_string())?,
        EntityKind::Tile | EntityKind::Sprite | EntityKind::Item => {
            let drawable = drawable(&world, kind, args.id)?;
            let palette = preview_palette(&world, args.palette)?;
            compositor
                .compose_preview(drawable, palette)
                .map_err(|e| e.to_string())?
        }
        other => return Err(format!("cannot render a {other}: only rooms and drawings")),
    };

    super::write_output(&to_json(&scene)?, args.output)
}

fn drawable<'w>(world: &'w World, kind: EntityKind, id: &str) -> Result<Drawable<'w>, String> {
    let found = match kind {
        EntityKind::Tile => world.require::<Tile>(id).map(Drawable::Tile),
        EntityKind::Sprite => world.require::<Sprite>(id).map(Drawable::Sprite),
        _ => world.require::<Item>(id).map(Drawable::Item),
    };
    found.map_err(|e| e.to_string())
}

fn preview_palette<'w>(world: &'w World, id: Option<&str>) -> Result<&'w Palette, String> {
    match id {
        Some(id) => world.require::<Palette>(id).map_err(|e| e.to_string()),
        None => world
            .palettes()
            .first()
            .ok_or_else(|| "no palette to preview with: the document defines none".to_string()),
    }
}

fn to_json(scene: &Scene) -> Result<String, String> {
    serde_json::to_string_pretty(scene).map_err(|e| format!("JSON serialization error: {e}"))
}
