use std::path::Path;

use colored::Colorize;
use rk_core::{
    ColorSlot, Dialog, Drawing, Ending, Entity, EntityKind, Item, Palette, Room, Sprite, Tile,
    Variable, World,
};

pub fn run(file: &Path, kind: &str, id: &str) -> Result<(), String> {
    let world = super::load_file(file)?;
    let kind = EntityKind::parse(kind).map_err(|e| e.to_string())?;

    match kind {
        EntityKind::Palette => show_palette(lookup::<Palette>(&world, id)?),
        EntityKind::Room => show_room(&world, lookup::<Room>(&world, id)?),
        EntityKind::Tile => {
            let tile = lookup::<Tile>(&world, id)?;
            header(&tile.id, kind);
            field("wall", if tile.is_wall { "yes" } else { "no" });
            show_drawing(&tile.drawing);
        }
        EntityKind::Sprite => {
            let sprite = lookup::<Sprite>(&world, id)?;
            header(&sprite.id, kind);
            field("room", sprite.room_id.as_deref().unwrap_or("—"));
            field(
                "position",
                &sprite
                    .position
                    .map_or_else(|| "—".to_string(), |p| p.to_string()),
            );
            optional_field("dialog", sprite.dialog_id.as_deref());
            show_drawing(&sprite.drawing);
        }
        EntityKind::Item => {
            let item = lookup::<Item>(&world, id)?;
            header(&item.id, kind);
            optional_field("name", item.name.as_deref());
            optional_field("dialog", item.dialog_id.as_deref());
            show_drawing(&item.drawing);
        }
        EntityKind::Dialog => {
            let dialog = lookup::<Dialog>(&world, id)?;
            header(&dialog.id, kind);
            show_text(&dialog.text);
        }
        EntityKind::Ending => {
            let ending = lookup::<Ending>(&world, id)?;
            header(&ending.id, kind);
            show_text(&ending.text);
        }
        EntityKind::Variable => {
            let variable = lookup::<Variable>(&world, id)?;
            header(&variable.id, kind);
            field("value", &variable.value);
        }
    }

    Ok(())
}

fn lookup<'w, T: Entity>(world: &'w World, id: &str) -> Result<&'w T, String> {
    world.require::<T>(id).map_err(|e| e.to_string())
}

fn header(id: &str, kind: EntityKind) {
    println!("  {} [{}]", id.bold(), kind.to_string().dimmed());
    println!();
}

fn field(name: &str, value: &str) {
    let label = format!("{name}:");
    println!("  {label:<10}  {value}");
}

fn optional_field(name: &str, value: Option<&str>) {
    if let Some(value) = value {
        field(name, value);
    }
}

fn show_palette(palette: &Palette) {
    header(&palette.id, EntityKind::Palette);
    optional_field("name", palette.name.as_deref());
    for (i, color) in palette.colors.iter().enumerate() {
        let role = [ColorSlot::Background, ColorSlot::Tile, ColorSlot::Occupant]
            .into_iter()
            .find(|slot| slot.index() == i)
            .map(|slot| format!("  {}", slot.to_string().dimmed()))
            .unwrap_or_default();
        println!("    {i:>2}  {color}{role}");
    }
}

fn show_room(world: &World, room: &Room) {
    header(&room.id, EntityKind::Room);
    optional_field("name", room.name.as_deref());
    let palette = match (&room.palette_id, world.palette_of(room)) {
        (Some(id), Some(_)) => id.clone(),
        (Some(id), None) => format!("{id} {}", "(missing)".red()),
        (None, _) => "—".to_string(),
    };
    field("palette", &palette);
    field("size", &format!("{}x{}", room.width(), room.height()));

    println!();
    for row in &room.grid {
        println!("    {}", row.join(","));
    }

    if !room.items.is_empty() || !room.endings.is_empty() || !room.exits.is_empty() {
        println!();
    }
    for placement in &room.items {
        let resolved = world.get::<Item>(&placement.item_id).is_some();
        println!(
            "    item {} at {}{}",
            placement.item_id,
            position(placement.position),
            missing_marker(resolved)
        );
    }
    for placement in &room.endings {
        let resolved = world.get::<Ending>(&placement.ending_id).is_some();
        println!(
            "    ending {} at {}{}",
            placement.ending_id,
            position(placement.position),
            missing_marker(resolved)
        );
    }
    for exit in &room.exits {
        let resolved = world.get::<Room>(&exit.target_room_id).is_some();
        println!(
            "    exit at {} to room {} at {}{}",
            position(exit.position),
            exit.target_room_id,
            position(exit.enter_position),
            missing_marker(resolved)
        );
    }

    let sprites: Vec<_> = world.sprites_in_room(&room.id).collect();
    if !sprites.is_empty() {
        println!();
        for sprite in sprites {
            println!("    sprite {} at {}", sprite.id, position(sprite.position));
        }
    }
}

fn show_drawing(drawing: &Drawing) {
    field("size", &format!("{}x{}", drawing.width(), drawing.height()));
    println!();
    print_frame(&drawing.frame1);
    if drawing.is_animated {
        println!("    {}", ">".dimmed());
        print_frame(&drawing.frame2);
    }
}

fn print_frame(rows: &[Vec<char>]) {
    for row in rows {
        let line: String = row.iter().collect();
        println!("    {line}");
    }
}

fn show_text(text: &str) {
    if text.is_empty() {
        println!("  {}", "(empty)".dimmed());
        return;
    }
    for line in text.lines() {
        println!("  {line}");
    }
}

fn position(position: Option<rk_core::Position>) -> String {
    position.map_or_else(|| "?".to_string(), |p| p.to_string())
}

fn missing_marker(resolved: bool) -> String {
    if resolved {
        String::new()
    } else {
        format!(" {}", "(missing)".red())
    }
}
