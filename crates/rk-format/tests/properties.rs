//! Property-based tests for rk-format.
use proptest::prelude::*;

use rk_core::{Color, Palette, Room, Tile};
use rk_format::{load_source, parse_entity};

fn color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::new(r, g, b))
}

fn token() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,3}"
}

proptest! {
    #[test]
    fn palette_colors_survive_reserialization(colors in prop::collection::vec(color(), 0..16)) {
        let mut source = String::from("PAL p\nNAME generated\n");
        for c in &colors {
            source.push_str(&format!("{c}\n"));
        }
        let first = load_source(&source);
        let palette = first.world.get::<Palette>("p").unwrap();
        prop_assert_eq!(&palette.colors, &colors);

        // Write the parsed colors back out and read them again.
        let rows: Vec<String> = palette.colors.iter().map(Color::to_string).collect();
        let mut lines = vec!["PAL p"];
        lines.extend(rows.iter().map(String::as_str));
        let again: Palette = parse_entity(&lines);
        prop_assert_eq!(again.colors, colors);
    }

    #[test]
    fn room_parsing_is_deterministic(
        grid in prop::collection::vec(prop::collection::vec(token(), 1..6), 1..6),
        items in prop::collection::vec((token(), 0i32..16, 0i32..16), 0..4),
    ) {
        let mut lines = vec!["ROOM r".to_string(), "PAL 0".to_string()];
        lines.extend(grid.iter().map(|row| row.join(",")));
        lines.extend(items.iter().map(|(id, x, y)| format!("ITM {id} {x},{y}")));
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

        let a: Room = parse_entity(&lines);
        let b: Room = parse_entity(&lines);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.grid, grid);
        prop_assert_eq!(a.items.len(), items.len());
    }

    #[test]
    fn animated_frames_match_dimensions(
        width in 1usize..9,
        height in 1usize..9,
        seed in prop::collection::vec(any::<bool>(), 128),
    ) {
        let row = |offset: usize| -> String {
            (0..width).map(|x| if seed[(offset + x) % seed.len()] { '1' } else { '0' }).collect()
        };
        let mut lines = vec!["TIL t".to_string()];
        lines.extend((0..height).map(|y| row(y * width)));
        lines.push(">".to_string());
        lines.extend((0..height).map(|y| row(64 + y * width)));
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

        let tile: Tile = parse_entity(&lines);
        prop_assert!(tile.drawing.is_animated);
        prop_assert_eq!(tile.drawing.frame1.len(), height);
        prop_assert_eq!(tile.drawing.frame2.len(), height);
        prop_assert!(tile.drawing.frames_align());
    }

    #[test]
    fn loading_arbitrary_text_never_fails(source in "[ -~\n]{0,400}") {
        let result = load_source(&source);
        prop_assert!(!result.has_errors());
    }
}
