use rk_core::{Drawing, Item, Sprite, Tile};

use super::{EntitySchema, Field, id, position_at, text};
use crate::classify::Header;
use crate::store::PropertyStore;

/// The line that separates animation frame 1 from frame 2.
pub const FRAME_SEPARATOR: &str = ">";

/// Split drawing rows into frames at the first separator line.
pub fn parse_drawing(lines: &[&str]) -> Drawing {
    fn rows(lines: &[&str]) -> Vec<Vec<char>> {
        lines.iter().map(|line| line.chars().collect()).collect()
    }

    match lines.iter().position(|line| *line == FRAME_SEPARATOR) {
        Some(split) => Drawing::new(rows(&lines[..split]), Some(rows(&lines[split + 1..]))),
        None => Drawing::new(rows(lines), None),
    }
}

fn lint_drawing(kind: &str, id: &str, drawing: &Drawing) -> Vec<String> {
    let mut notes = Vec::new();
    if !drawing.is_rectangular() {
        notes.push(format!("{kind} \"{id}\": pixel rows have uneven lengths"));
    }
    if !drawing.frames_align() {
        notes.push(format!(
            "{kind} \"{id}\": animation frames have different dimensions"
        ));
    }
    notes
}

impl EntitySchema for Tile {
    fn recognized_fields() -> Vec<Field<Self>> {
        vec![
            Field::<Self>::new("TIL", |t, first, _| t.id = id(first)),
            Field::<Self>::new("WAL", |t, first, _| {
                t.is_wall = first.and_then(|v| v.as_single()) == Some("true");
            }),
        ]
    }

    fn parse_data(&mut self, lines: &[&str]) {
        self.drawing = parse_drawing(lines);
    }

    fn lint(&self, _store: &PropertyStore) -> Vec<String> {
        lint_drawing("tile", &self.id, &self.drawing)
    }
}

impl EntitySchema for Sprite {
    fn recognized_fields() -> Vec<Field<Self>> {
        vec![
            Field::<Self>::new("SPR", |s, first, _| s.id = id(first)),
            Field::<Self>::new("DLG", |s, first, _| s.dialog_id = text(first)),
            Field::<Self>::new("POS", |s, first, _| {
                if let Some(value) = first {
                    s.room_id = value.tokens().first().cloned();
                    s.position = position_at(value, 1);
                }
            }),
        ]
    }

    fn parse_data(&mut self, lines: &[&str]) {
        self.drawing = parse_drawing(lines);
    }

    fn lint(&self, store: &PropertyStore) -> Vec<String> {
        let mut notes = lint_drawing("sprite", &self.id, &self.drawing);
        if store.exists(&Header::key("POS")) && self.position.is_none() {
            notes.push(format!("sprite \"{}\" has no valid position", self.id));
        }
        notes
    }
}

impl EntitySchema for Item {
    fn recognized_fields() -> Vec<Field<Self>> {
        vec![
            Field::<Self>::new("ITM", |i, first, _| i.id = id(first)),
            Field::<Self>::new("DLG", |i, first, _| i.dialog_id = text(first)),
            Field::<Self>::new("NAME", |i, first, _| i.name = text(first)),
        ]
    }

    fn parse_data(&mut self, lines: &[&str]) {
        self.drawing = parse_drawing(lines);
    }

    fn lint(&self, _store: &PropertyStore) -> Vec<String> {
        lint_drawing("item", &self.id, &self.drawing)
    }
}
