use rk_core::{EndingPlacement, Exit, ItemPlacement, Room};

use super::{EntitySchema, Field, id, position_at, text, token_at};
use crate::store::PropertyStore;

impl EntitySchema for Room {
    fn recognized_fields() -> Vec<Field<Self>> {
        vec![
            Field::<Self>::new("ROOM", |r, first, _| r.id = id(first)),
            Field::<Self>::new("NAME", |r, first, _| r.name = text(first)),
            Field::<Self>::new("PAL", |r, first, _| r.palette_id = text(first)),
            Field::<Self>::new("ITM", |r, _, all| {
                r.items = all
                    .iter()
                    .map(|v| ItemPlacement {
                        item_id: token_at(v, 0),
                        position: position_at(v, 1),
                    })
                    .collect();
            }),
            Field::<Self>::new("END", |r, _, all| {
                r.endings = all
                    .iter()
                    .map(|v| EndingPlacement {
                        ending_id: token_at(v, 0),
                        position: position_at(v, 1),
                    })
                    .collect();
            }),
            Field::<Self>::new("EXT", |r, _, all| {
                r.exits = all
                    .iter()
                    .map(|v| Exit {
                        position: position_at(v, 0),
                        target_room_id: token_at(v, 1),
                        enter_position: position_at(v, 2),
                    })
                    .collect();
            }),
        ]
    }

    fn parse_data(&mut self, lines: &[&str]) {
        self.grid = lines
            .iter()
            .map(|line| line.split(',').map(|t| t.trim().to_string()).collect())
            .collect();
    }

    fn lint(&self, _store: &PropertyStore) -> Vec<String> {
        let mut notes = Vec::new();
        if !self.is_rectangular() {
            notes.push(format!("room \"{}\": grid rows have uneven lengths", self.id));
        }
        for item in self.items.iter().filter(|p| p.position.is_none()) {
            notes.push(format!(
                "room \"{}\": item \"{}\" has no valid position",
                self.id, item.item_id
            ));
        }
        for ending in self.endings.iter().filter(|p| p.position.is_none()) {
            notes.push(format!(
                "room \"{}\": ending \"{}\" has no valid position",
                self.id, ending.ending_id
            ));
        }
        for exit in &self.exits {
            if exit.position.is_none() || exit.enter_position.is_none() {
                notes.push(format!(
                    "room \"{}\": exit to \"{}\" has no valid position",
                    self.id, exit.target_room_id
                ));
            }
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use rk_core::Position;

    use super::*;
    use crate::parser::{parse_entity, parse_with_store};

    const ROOM: &[&str] = &[
        "ROOM 0",
        "a,b",
        "c,d",
        "NAME tea room",
        "ITM 0 1,0",
        "ITM 1 0,1",
        "END 0 1,1",
        "EXT 0,0 1 3,4",
        "PAL 2",
    ];

    #[test]
    fn parses_fields_and_grid() {
        let room: Room = parse_entity(ROOM);
        assert_eq!(room.id, "0");
        assert_eq!(room.name.as_deref(), Some("tea room"));
        assert_eq!(room.palette_id.as_deref(), Some("2"));
        assert_eq!(room.grid, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn multi_occurrence_fields_keep_every_line() {
        let room: Room = parse_entity(ROOM);
        assert_eq!(
            room.items,
            vec![
                ItemPlacement {
                    item_id: "0".into(),
                    position: Some(Position::new(1, 0)),
                },
                ItemPlacement {
                    item_id: "1".into(),
                    position: Some(Position::new(0, 1)),
                },
            ]
        );
        assert_eq!(room.endings[0].ending_id, "0");
        assert_eq!(
            room.exits,
            vec![Exit {
                position: Some(Position::new(0, 0)),
                target_room_id: "1".into(),
                enter_position: Some(Position::new(3, 4)),
            }]
        );
    }

    #[test]
    fn absent_fields_leave_empty_lists() {
        let room: Room = parse_entity(&["ROOM 5", "0,0"]);
        assert!(room.items.is_empty());
        assert!(room.exits.is_empty());
        assert!(room.palette_id.is_none());
    }

    #[test]
    fn malformed_placement_position_is_absent() {
        let parsed = parse_with_store::<Room>(&["ROOM 0", "ITM 0 x,1", "0,0"]);
        assert_eq!(parsed.entity.items[0].position, None);
        assert_eq!(
            parsed.entity.lint(&parsed.store),
            vec!["room \"0\": item \"0\" has no valid position"]
        );
    }

    #[test]
    fn uneven_grid_is_kept_and_reported() {
        let parsed = parse_with_store::<Room>(&["ROOM 0", "a,b,c", "a"]);
        assert_eq!(parsed.entity.grid[1], vec!["a"]);
        assert_eq!(
            parsed.entity.lint(&parsed.store),
            vec!["room \"0\": grid rows have uneven lengths"]
        );
    }
}
