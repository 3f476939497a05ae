use std::collections::HashSet;

use rk_core::{
    AnyEntity, Dialog, Ending, EntityKind, Item, Palette, Room, Sprite, Tile, Variable, World,
};

use crate::classify::{Header, classify};
use crate::diagnostics::{Diagnostic, Severity, Span};
use crate::parser::{Parsed, parse_with_store};
use crate::schema::EntitySchema;

/// Result of loading a document into a World.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded world. Always populated with every chunk that could be
    /// dispatched, even when warnings were produced.
    pub world: World,
    /// Errors and warnings produced while loading.
    pub diagnostics: Vec<Diagnostic>,
    /// The document text the diagnostic spans index into. Empty when the
    /// document could not be read.
    pub source: String,
}

impl LoadResult {
    /// Returns `true` if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}

/// A blank-line-delimited block of trimmed, non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'s> {
    /// The chunk's lines, trimmed, in document order.
    pub lines: Vec<&'s str>,
    /// Byte range from the start of the first line to the end of the last.
    pub span: Span,
}

impl Chunk<'_> {
    /// The entity kind named by the chunk's first line, if any.
    ///
    /// The first line must be a header followed by at least one token; a
    /// bare `PAL` with nothing after it opens nothing.
    pub fn kind(&self) -> Option<EntityKind> {
        let first = self.lines.first()?;
        match classify(first).header {
            Header::Key(token) => EntityKind::from_header(&token),
            Header::Data => None,
        }
    }
}

/// Split a document into chunks. Any line that is empty after trimming
/// ends the current chunk.
pub fn split_chunks(source: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut current: Option<Chunk<'_>> = None;
    let mut offset = 0;

    for raw in source.split_inclusive('\n') {
        let start = offset;
        offset += raw.len();

        let line = raw.trim();
        if line.is_empty() {
            chunks.extend(current.take());
            continue;
        }

        let line_start = start + (raw.len() - raw.trim_start().len());
        let line_end = line_start + line.len();
        match current.as_mut() {
            Some(chunk) => {
                chunk.lines.push(line);
                chunk.span.end = line_end;
            }
            None => {
                current = Some(Chunk {
                    lines: vec![line],
                    span: line_start..line_end,
                });
            }
        }
    }

    chunks.extend(current);
    chunks
}

/// Load a whole document into a World.
///
/// Chunks are dispatched in document order by their first token. Nothing
/// here fails: unknown chunks are dropped with a warning, tolerated parse
/// problems become warnings, and references between entities are left for
/// lookup time.
pub fn load(source: &str) -> LoadResult {
    let mut loader = WorldLoader::new();
    for chunk in split_chunks(source) {
        loader.load_chunk(&chunk);
    }
    loader.finish(source)
}

struct WorldLoader {
    world: World,
    diagnostics: Vec<Diagnostic>,
    seen: HashSet<(EntityKind, String)>,
}

impl WorldLoader {
    fn new() -> Self {
        Self {
            world: World::new(),
            diagnostics: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn load_chunk(&mut self, chunk: &Chunk<'_>) {
        let Some(kind) = chunk.kind() else {
            let header = chunk.lines.first().copied().unwrap_or_default();
            tracing::debug!(header, "dropping chunk with unrecognized header");
            self.diagnostics.push(
                Diagnostic::warning(
                    chunk.span.clone(),
                    format!("dropped chunk starting with \"{header}\": not an entity header"),
                )
                .with_label("unrecognized header"),
            );
            return;
        };

        let (entity, notes) = parse_chunk(kind, &chunk.lines);
        tracing::debug!(%kind, id = entity.id(), lines = chunk.lines.len(), "loaded chunk");

        for note in notes {
            self.diagnostics
                .push(Diagnostic::warning(chunk.span.clone(), note));
        }

        if !self.seen.insert((kind, entity.id().to_string())) {
            self.diagnostics.push(
                Diagnostic::warning(
                    chunk.span.clone(),
                    format!(
                        "duplicate {kind} id \"{}\": lookups resolve to the first one",
                        entity.id()
                    ),
                )
                .with_label("duplicate id"),
            );
        }

        self.world.add(entity);
    }

    fn finish(self, source: &str) -> LoadResult {
        tracing::debug!(
            entities = self.world.entity_count(),
            warnings = self.diagnostics.len(),
            "loaded world"
        );
        LoadResult {
            world: self.world,
            diagnostics: self.diagnostics,
            source: source.to_string(),
        }
    }
}

/// Parse a chunk with the schema for its kind.
fn parse_chunk(kind: EntityKind, lines: &[&str]) -> (AnyEntity, Vec<String>) {
    match kind {
        EntityKind::Palette => parse_as::<Palette>(lines),
        EntityKind::Room => parse_as::<Room>(lines),
        EntityKind::Tile => parse_as::<Tile>(lines),
        EntityKind::Sprite => parse_as::<Sprite>(lines),
        EntityKind::Item => parse_as::<Item>(lines),
        EntityKind::Dialog => parse_as::<Dialog>(lines),
        EntityKind::Ending => parse_as::<Ending>(lines),
        EntityKind::Variable => parse_as::<Variable>(lines),
    }
}

fn parse_as<T: EntitySchema>(lines: &[&str]) -> (AnyEntity, Vec<String>) {
    let Parsed { entity, store } = parse_with_store::<T>(lines);
    let notes = entity.lint(&store);
    (entity.into(), notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_split_on_blank_lines() {
        let source = "PAL 0\n0,0,0\n\n\nROOM 0\n  0,0  \n";
        let chunks = split_chunks(source);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].lines, vec!["PAL 0", "0,0,0"]);
        assert_eq!(chunks[1].lines, vec!["ROOM 0", "0,0"]);
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        let chunks = split_chunks("TIL a\n1\n   \t\nTIL b\n0");
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn chunk_spans_cover_trimmed_lines() {
        let source = "PAL 0\n0,0,0\n\n  ROOM 0\r\n0,0\r\n";
        let chunks = split_chunks(source);
        assert_eq!(&source[chunks[0].span.clone()], "PAL 0\n0,0,0");
        assert_eq!(&source[chunks[1].span.clone()], "ROOM 0\r\n0,0");
        assert_eq!(chunks[1].lines, vec!["ROOM 0", "0,0"]);
    }

    #[test]
    fn chunk_kind_needs_header_and_value() {
        let chunk = |lines: Vec<&'static str>| Chunk { lines, span: 0..0 };
        assert_eq!(chunk(vec!["SPR A"]).kind(), Some(EntityKind::Sprite));
        assert_eq!(chunk(vec!["SPR"]).kind(), None);
        assert_eq!(chunk(vec!["FOO 1"]).kind(), None);
    }

    #[test]
    fn unknown_chunk_is_dropped_with_warning() {
        let result = load("FOO 1\nbar\n\nVAR a\n42\n");
        assert!(!result.has_errors());
        assert_eq!(result.world.entity_count(), 1);
        assert_eq!(result.warning_count(), 1);
        assert!(result.diagnostics[0].message.contains("FOO 1"));
    }

    #[test]
    fn chunks_are_filed_in_document_order() {
        let result = load("TIL b\n1\n\nTIL a\n0\n\nTIL c\n1\n");
        assert_eq!(result.world.ids(EntityKind::Tile), vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_ids_are_kept_with_warning() {
        let result = load("DLG 0\nfirst\n\nDLG 0\nsecond\n");
        assert_eq!(result.world.dialogs().len(), 2);
        assert_eq!(result.world.get::<Dialog>("0").unwrap().text, "first");
        assert_eq!(result.warning_count(), 1);
        assert!(result.diagnostics[0].message.contains("duplicate dialog id"));
    }

    #[test]
    fn same_id_across_kinds_is_not_a_duplicate() {
        let result = load("PAL 0\n0,0,0\n\nROOM 0\n0\nPAL 0\n");
        assert_eq!(result.warning_count(), 0);
    }
}
