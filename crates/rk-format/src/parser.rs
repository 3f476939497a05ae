use crate::classify::{ClassifiedLine, FieldValue, Header, classify};
use crate::schema::{EntitySchema, recognizes};
use crate::store::PropertyStore;

/// A parsed entity together with the values its lines produced.
#[derive(Debug)]
pub struct Parsed<T> {
    /// The populated entity.
    pub entity: T,
    /// Everything recorded while classifying the chunk.
    pub store: PropertyStore,
}

/// Parse one chunk's lines into an entity of kind `T`.
///
/// Parsing is best effort and never fails: fields whose header never
/// appears are left at their defaults, malformed positions are absent, and
/// rows the kind cannot use are dropped by its data handler.
pub fn parse_entity<T: EntitySchema>(lines: &[&str]) -> T {
    parse_with_store(lines).entity
}

/// Like [`parse_entity`], but also returns the property store so callers
/// can inspect what was recorded.
///
/// 1. Classify every line. Lines keyed by a header the schema recognizes
///    are recorded under it; everything else is recorded as data, keeping
///    the whole line.
/// 2. Run each setter in schema order with the first and all values of its
///    header, whether or not the header appeared.
/// 3. Hand the data lines to the schema's data handler in input order.
pub fn parse_with_store<T: EntitySchema>(lines: &[&str]) -> Parsed<T> {
    let fields = T::recognized_fields();
    let mut store = PropertyStore::new();

    for line in lines {
        let ClassifiedLine { header, value } = classify(line);
        match header {
            Header::Key(key) if recognizes(&fields, &key) => {
                store.record(Header::Key(key), value);
            }
            _ => store.record(Header::Data, FieldValue::Single((*line).to_string())),
        }
    }

    let mut entity = T::default();
    for field in &fields {
        let header = Header::key(field.header);
        (field.set)(&mut entity, store.first(&header), store.all(&header));
    }
    entity.parse_data(&store.data_lines());

    Parsed { entity, store }
}

#[cfg(test)]
mod tests {
    use rk_core::{Palette, Room, Tile};

    use super::*;

    #[test]
    fn unrecognized_header_becomes_data() {
        let parsed = parse_with_store::<Tile>(&["TIL a", "FOO bar", "0110"]);
        assert!(!parsed.store.exists(&Header::key("FOO")));
        assert_eq!(parsed.store.data_lines(), vec!["FOO bar", "0110"]);
    }

    #[test]
    fn setters_run_in_schema_order_regardless_of_input_order() {
        let a: Room = parse_entity(&["PAL 1", "ROOM 0", "NAME x", "0,0"]);
        let b: Room = parse_entity(&["ROOM 0", "NAME x", "PAL 1", "0,0"]);
        assert_eq!(a, b);
    }

    #[test]
    fn setters_run_even_when_header_is_absent() {
        let palette: Palette = parse_entity(&["0,0,0"]);
        assert_eq!(palette.id, "");
        assert!(palette.name.is_none());
        assert_eq!(palette.colors.len(), 1);
    }

    #[test]
    fn header_line_for_another_kind_is_data() {
        // A `ROOM` line inside a tile chunk is not one of the tile's fields.
        let tile: Tile = parse_entity(&["TIL a", "ROOM 0", "11"]);
        assert_eq!(tile.drawing.frame1.len(), 2);
        assert_eq!(tile.drawing.frame1[0].len(), "ROOM 0".len());
    }

    #[test]
    fn reparsing_is_deterministic() {
        let lines = ["ROOM 3", "a,b", "ITM 1 0,0", "ITM 2 1,0", "EXT 1,1 4 0,0"];
        let first: Room = parse_entity(&lines);
        let second: Room = parse_entity(&lines);
        assert_eq!(first, second);
    }
}
