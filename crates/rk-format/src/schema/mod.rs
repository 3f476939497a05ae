//! Per-kind field schemas.
//!
//! A schema is an ordered list of `(header, setter)` pairs plus an optional
//! handler for residual data rows. The parser runs setters in the order the
//! schema lists them, never in input order, so the result of parsing a chunk
//! does not depend on how its field lines were arranged.

mod drawing;
mod palette;
mod room;
mod text;

use rk_core::{AnyEntity, Entity, Position};

use crate::classify::FieldValue;
use crate::store::PropertyStore;

/// Receives the first value recorded under a header and every value
/// recorded under it.
pub type Setter<T> = fn(&mut T, Option<&FieldValue>, &[FieldValue]);

/// One recognized header and the setter that consumes it.
pub struct Field<T> {
    /// The header token, e.g. `PAL`.
    pub header: &'static str,
    /// Applies the recorded values to the entity.
    pub set: Setter<T>,
}

impl<T> Field<T> {
    /// Pair a header with its setter.
    pub fn new(header: &'static str, set: Setter<T>) -> Self {
        Self { header, set }
    }
}

/// How an entity kind maps chunk lines onto its fields.
pub trait EntitySchema: Entity + Default + Into<AnyEntity> {
    /// The headers this kind recognizes, in the order their setters run.
    fn recognized_fields() -> Vec<Field<Self>>;

    /// Consume the residual data rows, in input order.
    fn parse_data(&mut self, _lines: &[&str]) {}

    /// Describe anything the parse had to tolerate: malformed rows, absent
    /// positions, uneven grids. Never affects the entity itself.
    fn lint(&self, _store: &PropertyStore) -> Vec<String> {
        Vec::new()
    }
}

/// Whether a kind's schema recognizes a header token.
pub fn recognizes<T: EntitySchema>(fields: &[Field<T>], header: &str) -> bool {
    fields.iter().any(|f| f.header == header)
}

/// A text field: every token of the first occurrence, joined by spaces.
fn text(first: Option<&FieldValue>) -> Option<String> {
    first.map(FieldValue::joined)
}

/// An id field; missing ids are empty.
fn id(first: Option<&FieldValue>) -> String {
    text(first).unwrap_or_default()
}

/// The position token at `index` of a field value.
fn position_at(value: &FieldValue, index: usize) -> Option<Position> {
    value.tokens().get(index).and_then(|t| Position::parse(t))
}

/// The token at `index` of a field value, empty if absent.
fn token_at(value: &FieldValue, index: usize) -> String {
    value.tokens().get(index).cloned().unwrap_or_default()
}
