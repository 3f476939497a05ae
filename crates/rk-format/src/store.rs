use std::collections::HashMap;

use crate::classify::{FieldValue, Header};

/// Every value recorded for a chunk, grouped by header.
///
/// Values under one header keep the order they were recorded in, and
/// repeated headers keep every occurrence. Single-occurrence fields read
/// [`PropertyStore::first`], so the first line wins.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    entries: HashMap<Header, Vec<FieldValue>>,
}

impl PropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under a header.
    pub fn record(&mut self, header: Header, value: FieldValue) {
        self.entries.entry(header).or_default().push(value);
    }

    /// The first value recorded under a header.
    pub fn first(&self, header: &Header) -> Option<&FieldValue> {
        self.entries.get(header).and_then(|values| values.first())
    }

    /// Every value recorded under a header; empty if none was.
    pub fn all(&self, header: &Header) -> &[FieldValue] {
        self.entries.get(header).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether a header was recorded at least once.
    pub fn exists(&self, header: &Header) -> bool {
        self.entries.contains_key(header)
    }

    /// The residual data lines, in recording order.
    pub fn data_lines(&self) -> Vec<&str> {
        self.all(&Header::Data)
            .iter()
            .map(|value| match value {
                FieldValue::Single(line) => line.as_str(),
                FieldValue::List(_) => "",
            })
            .collect()
    }
}
