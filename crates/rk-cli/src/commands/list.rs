use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rk_core::{Drawing, EntityKind, World};

pub fn run(file: &Path, kind: Option<&str>) -> Result<(), String> {
    let world = super::load_file(file)?;

    let kinds = match kind {
        Some(name) => vec![EntityKind::parse(name).map_err(|e| e.to_string())?],
        None => EntityKind::ALL.to_vec(),
    };

    let rows: Vec<[String; 3]> = kinds.into_iter().flat_map(|k| rows(&world, k)).collect();

    if rows.is_empty() {
        println!("  No entities found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Kind", "Summary"]);
    for row in &rows {
        table.add_row(row.to_vec());
    }

    println!("{table}");
    println!();
    println!("  {} entities", rows.len());

    Ok(())
}

fn rows(world: &World, kind: EntityKind) -> Vec<[String; 3]> {
    let row = |id: &str, summary: String| [id.to_string(), kind.to_string(), summary];

    match kind {
        EntityKind::Palette => world
            .palettes()
            .iter()
            .map(|p| {
                let colors = format!("{} colors", p.colors.len());
                row(&p.id, with_name(p.name.as_deref(), colors))
            })
            .collect(),
        EntityKind::Room => world
            .rooms()
            .iter()
            .map(|r| {
                let size = format!(
                    "{}x{}, palette {}",
                    r.width(),
                    r.height(),
                    r.palette_id.as_deref().unwrap_or("—")
                );
                row(&r.id, with_name(r.name.as_deref(), size))
            })
            .collect(),
        EntityKind::Tile => world
            .tiles()
            .iter()
            .map(|t| {
                let mut summary = drawing_summary(&t.drawing);
                if t.is_wall {
                    summary.push_str(", wall");
                }
                row(&t.id, summary)
            })
            .collect(),
        EntityKind::Sprite => world
            .sprites()
            .iter()
            .map(|s| {
                let place = match (&s.room_id, s.position) {
                    (Some(room), Some(pos)) => format!("room {room} at {pos}"),
                    (Some(room), None) => format!("room {room}"),
                    _ => "unplaced".to_string(),
                };
                row(&s.id, format!("{}, {place}", drawing_summary(&s.drawing)))
            })
            .collect(),
        EntityKind::Item => world
            .items()
            .iter()
            .map(|i| row(&i.id, with_name(i.name.as_deref(), drawing_summary(&i.drawing))))
            .collect(),
        EntityKind::Dialog => world
            .dialogs()
            .iter()
            .map(|d| row(&d.id, excerpt(&d.text)))
            .collect(),
        EntityKind::Ending => world
            .endings()
            .iter()
            .map(|e| row(&e.id, excerpt(&e.text)))
            .collect(),
        EntityKind::Variable => world
            .variables()
            .iter()
            .map(|v| row(&v.id, excerpt(&v.value)))
            .collect(),
    }
}

fn with_name(name: Option<&str>, rest: String) -> String {
    match name {
        Some(name) => format!("{name} ({rest})"),
        None => rest,
    }
}

fn drawing_summary(drawing: &Drawing) -> String {
    let size = format!("{}x{}", drawing.width(), drawing.height());
    if drawing.is_animated {
        format!("{size}, animated")
    } else {
        size
    }
}

/// First line of a text, cut to fit a table cell.
fn excerpt(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.is_empty() {
        "—".to_string()
    } else if line.chars().count() > 60 {
        format!("{}...", line.chars().take(57).collect::<String>())
    } else {
        line.to_string()
    }
}
