//! Line-oriented game document loader for roomkit.
//!
//! A document is a sequence of blank-line-delimited chunks. Each chunk's
//! first token picks an entity kind, and that kind's [`schema`] maps the
//! chunk's lines onto fields. Loading is best effort: it never fails on
//! malformed content, it reports what it tolerated as warnings.

/// Line classification into header and value.
pub mod classify;
/// Diagnostics and their terminal rendering.
pub mod diagnostics;
/// Chunk splitting, kind dispatch, and world assembly.
pub mod loader;
/// The schema-driven entity parser.
pub mod parser;
/// Per-kind field schemas.
pub mod schema;
/// Multi-valued property accumulator.
pub mod store;

use std::path::Path;

pub use classify::{ClassifiedLine, FieldValue, Header, classify};
pub use diagnostics::{Diagnostic, Severity, render_diagnostics, summarize};
pub use loader::{Chunk, LoadResult, load, split_chunks};
pub use parser::{Parsed, parse_entity, parse_with_store};
pub use schema::{EntitySchema, Field};
pub use store::PropertyStore;

/// Load a document held in memory.
pub fn load_source(source: &str) -> LoadResult {
    load(source)
}

/// Load a document from a file.
///
/// A file that cannot be read yields an empty World, an empty source, and
/// a single error diagnostic.
pub fn load_file(path: &Path) -> LoadResult {
    match std::fs::read_to_string(path) {
        Ok(source) => load(&source),
        Err(e) => LoadResult {
            world: rk_core::World::new(),
            diagnostics: vec![Diagnostic::error(
                0..0,
                format!("cannot read {}: {e}", path.display()),
            )],
            source: String::new(),
        },
    }
}
