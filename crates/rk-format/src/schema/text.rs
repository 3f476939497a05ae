use rk_core::{Dialog, Ending, Variable};

use super::{EntitySchema, Field, id};

/// Empty for no lines, the line itself for one, newline-joined for more.
fn body(lines: &[&str]) -> String {
    lines.join("\n")
}

impl EntitySchema for Dialog {
    fn recognized_fields() -> Vec<Field<Self>> {
        vec![Field::<Self>::new("DLG", |d, first, _| d.id = id(first))]
    }

    fn parse_data(&mut self, lines: &[&str]) {
        self.text = body(lines);
    }
}

impl EntitySchema for Ending {
    fn recognized_fields() -> Vec<Field<Self>> {
        vec![Field::<Self>::new("END", |e, first, _| e.id = id(first))]
    }

    fn parse_data(&mut self, lines: &[&str]) {
        self.text = body(lines);
    }
}

impl EntitySchema for Variable {
    fn recognized_fields() -> Vec<Field<Self>> {
        vec![Field::<Self>::new("VAR", |v, first, _| v.id = id(first))]
    }

    fn parse_data(&mut self, lines: &[&str]) {
        self.value = lines.first().map(|l| (*l).to_string()).unwrap_or_default();
    }
}
