//! Integration tests for loading worlds with rk-format.
use rk_core::{Color, Dialog, EntityKind, Item, Palette, Position, Room, Sprite, Tile, Variable};
use rk_format::{Severity, load_source};

const GAME: &str = r#"PAL 0
NAME blueprint
0,82,204
128,159,255
255,255,255

ROOM 0
NAME tea room
a,a,a
a,0,a
a,a,a
ITM 0 1,1
END 0 2,2
EXT 0,1 1 2,1
PAL 0

ROOM 1
0,0,0
0,0,0
0,0,0
PAL 0

TIL a
11111111
10000001
10000001
11111111
WAL true

TIL w
01
>
10

SPR A
00011000
00111100
POS 0 1,1

SPR cat
010
>
101
DLG meow
POS 1 0,0

ITM 0
00000000
00111100
NAME tea
DLG tea_text

DLG meow
I'm a cat
meow

DLG tea_text
You found a nice warm cup of tea

END 0
the end

VAR a
42
"#;

#[test]
fn loads_every_kind() {
    let result = load_source(GAME);
    assert!(!result.has_errors(), "errors: {:?}", result.diagnostics);
    assert_eq!(result.warning_count(), 0, "warnings: {:?}", result.diagnostics);

    let world = &result.world;
    assert_eq!(world.count(EntityKind::Palette), 1);
    assert_eq!(world.count(EntityKind::Room), 2);
    assert_eq!(world.count(EntityKind::Tile), 2);
    assert_eq!(world.count(EntityKind::Sprite), 2);
    assert_eq!(world.count(EntityKind::Item), 1);
    assert_eq!(world.count(EntityKind::Dialog), 2);
    assert_eq!(world.count(EntityKind::Ending), 1);
    assert_eq!(world.count(EntityKind::Variable), 1);
    assert_eq!(world.entity_count(), 12);
}

#[test]
fn palette_colors_keep_order() {
    let result = load_source(GAME);
    let palette = result.world.get::<Palette>("0").unwrap();
    assert_eq!(palette.name.as_deref(), Some("blueprint"));
    assert_eq!(palette.colors[0], Color::new(0, 82, 204));
    assert_eq!(palette.colors[2], Color::new(255, 255, 255));
}

#[test]
fn room_placements_and_exits() {
    let result = load_source(GAME);
    let room = result.world.get::<Room>("0").unwrap();
    assert_eq!(room.name.as_deref(), Some("tea room"));
    assert_eq!(room.palette_id.as_deref(), Some("0"));
    assert_eq!(room.width(), 3);
    assert_eq!(room.height(), 3);
    assert_eq!(room.tile_id_at(Position::new(1, 1)), Some("0"));
    assert_eq!(room.item_at(Position::new(1, 1)).unwrap().item_id, "0");
    assert_eq!(room.ending_at(Position::new(2, 2)).unwrap().ending_id, "0");

    let exit = room.exit_at(Position::new(0, 1)).unwrap();
    assert_eq!(exit.target_room_id, "1");
    assert_eq!(exit.enter_position, Some(Position::new(2, 1)));
    // Exits are weak references: resolve the target on demand.
    assert!(result.world.get::<Room>(&exit.target_room_id).is_some());
}

#[test]
fn drawings_and_animation() {
    let result = load_source(GAME);
    let wall = result.world.get::<Tile>("a").unwrap();
    assert!(wall.is_wall);
    assert!(!wall.drawing.is_animated);
    assert_eq!(wall.drawing.height(), 4);

    let water = result.world.get::<Tile>("w").unwrap();
    assert!(water.drawing.is_animated);
    assert_eq!(water.drawing.frame1, vec![vec!['0', '1']]);
    assert_eq!(water.drawing.frame2, vec![vec!['1', '0']]);

    let cat = result.world.get::<Sprite>("cat").unwrap();
    assert_eq!(cat.room_id.as_deref(), Some("1"));
    assert_eq!(cat.position, Some(Position::new(0, 0)));
    assert_eq!(cat.dialog_id.as_deref(), Some("meow"));
    assert!(cat.drawing.is_animated);
}

#[test]
fn text_entities() {
    let result = load_source(GAME);
    let meow = result.world.get::<Dialog>("meow").unwrap();
    assert_eq!(meow.text, "I'm a cat\nmeow");
    let item = result.world.get::<Item>("0").unwrap();
    assert_eq!(item.name.as_deref(), Some("tea"));
    let tea = result.world.get::<Dialog>(item.dialog_id.as_deref().unwrap()).unwrap();
    assert_eq!(tea.text, "You found a nice warm cup of tea");
    assert_eq!(result.world.get::<Variable>("a").unwrap().value, "42");
}

#[test]
fn unrecognized_chunk_produces_no_entity() {
    let result = load_source("FOO 1\n0,0,0\n");
    assert!(!result.has_errors());
    assert_eq!(result.world.entity_count(), 0);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn references_are_not_validated_at_load() {
    let result = load_source("ROOM 0\nzz,zz\nPAL nowhere\nITM ghost 0,0\n");
    assert!(!result.has_errors());
    assert_eq!(result.warning_count(), 0);
    let room = result.world.get::<Room>("0").unwrap();
    assert!(result.world.palette_of(room).is_none());
    assert!(result.world.item_at(room, Position::new(0, 0)).is_none());
}

#[test]
fn tolerated_problems_become_warnings() {
    let result = load_source("PAL 0\n1,2,3\nnot a color\n9,9\n\nSPR A\n1\nPOS 0 1\n");
    assert!(!result.has_errors());
    assert_eq!(result.world.entity_count(), 2);
    let messages: Vec<_> = result.diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "palette \"0\": skipped 2 malformed color rows",
            "sprite \"A\" has no valid position",
        ]
    );
}

#[test]
fn missing_file_is_an_error() {
    let result = rk_format::load_file(std::path::Path::new("/nonexistent/game.txt"));
    assert!(result.has_errors());
    assert_eq!(result.world.entity_count(), 0);
    assert!(result.source.is_empty());
    assert!(result.diagnostics[0].message.contains("cannot read"));
}

#[test]
fn file_load_keeps_source_for_rendering() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("game.txt");
    std::fs::write(&path, GAME).unwrap();

    let result = rk_format::load_file(&path);
    assert_eq!(result.source, GAME);
    assert_eq!(result.world.entity_count(), load_source(GAME).world.entity_count());

    for diagnostic in &result.diagnostics {
        assert!(result.source.get(diagnostic.span.clone()).is_some());
    }
}
