use rk_core::{Color, Palette};

use super::{EntitySchema, Field, id, text};
use crate::classify::Header;
use crate::store::PropertyStore;

impl EntitySchema for Palette {
    fn recognized_fields() -> Vec<Field<Self>> {
        vec![
            Field::<Self>::new("PAL", |p, first, _| p.id = id(first)),
            Field::<Self>::new("NAME", |p, first, _| p.name = text(first)),
        ]
    }

    fn parse_data(&mut self, lines: &[&str]) {
        self.colors = lines.iter().filter_map(|line| Color::parse(line)).collect();
    }

    fn lint(&self, store: &PropertyStore) -> Vec<String> {
        let rows = store.all(&Header::Data).len();
        let skipped = rows.saturating_sub(self.colors.len());
        if skipped == 0 {
            return Vec::new();
        }
        vec![format!(
            "palette \"{}\": skipped {skipped} malformed color row{}",
            self.id,
            if skipped == 1 { "" } else { "s" },
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_entity, parse_with_store};

    #[test]
    fn parses_id_name_and_colors() {
        let palette: Palette = parse_entity(&["PAL 0", "NAME blueprint", "0,82,204", "128,159,255", "255,255,255"]);
        assert_eq!(palette.id, "0");
        assert_eq!(palette.name.as_deref(), Some("blueprint"));
        assert_eq!(
            palette.colors,
            vec![Color::new(0, 82, 204), Color::new(128, 159, 255), Color::new(255, 255, 255)]
        );
    }

    #[test]
    fn malformed_color_rows_are_skipped() {
        let parsed = parse_with_store::<Palette>(&["PAL 0", "1,2", "1,2,3", "red", "4,5,6,7"]);
        assert_eq!(parsed.entity.colors, vec![Color::new(1, 2, 3)]);

        let notes = parsed.entity.lint(&parsed.store);
        assert_eq!(notes, vec!["palette \"0\": skipped 3 malformed color rows"]);
    }

    #[test]
    fn multi_word_name_is_joined() {
        let palette: Palette = parse_entity(&["PAL 1", "NAME night  sky"]);
        assert_eq!(palette.name.as_deref(), Some("night sky"));
    }

    #[test]
    fn first_name_wins() {
        let palette: Palette = parse_entity(&["PAL 1", "NAME first", "NAME second"]);
        assert_eq!(palette.name.as_deref(), Some("first"));
    }
}
