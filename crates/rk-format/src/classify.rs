use std::fmt;

use logos::Logos;

/// Header under which every unkeyed line is recorded.
pub const DATA_HEADER: &str = "_DATA";

/// The key a line is recorded under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Header {
    /// Residual data: the line had a single token, or its leading token is
    /// not a field the entity recognizes.
    Data,
    /// A field line keyed by its leading token.
    Key(String),
}

impl Header {
    /// A field header for the given token.
    pub fn key(token: impl Into<String>) -> Self {
        Self::Key(token.into())
    }

    /// The header token, `_DATA` for residual lines.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Data => DATA_HEADER,
            Self::Key(k) => k,
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value part of a classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Exactly one token followed the header, or the whole line of a data row.
    Single(String),
    /// Two or more tokens followed the header, in order.
    List(Vec<String>),
}

impl FieldValue {
    /// The value when it is a single token.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// The value as a token sequence; a single value is a one-element slice.
    pub fn tokens(&self) -> &[String] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::List(tokens) => tokens,
        }
    }

    /// All tokens joined by single spaces.
    pub fn joined(&self) -> String {
        self.tokens().join(" ")
    }
}

/// A line split into its header and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// What the line is keyed under.
    pub header: Header,
    /// The remaining tokens, or the whole line for data rows.
    pub value: FieldValue,
}

#[derive(Logos, Debug)]
#[logos(skip r"[ \t]+")]
enum RawToken {
    #[regex(r"[^ \t]+")]
    Word,
}

/// Split a line into whitespace-delimited tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    RawToken::lexer(line)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|_| &line[span]))
        .collect()
}

/// Classify one trimmed line.
///
/// A line with more than one token is keyed by its first token; a line with
/// a single token is residual data and keeps the entire original line, so
/// rows like `0,0,1` or `00111100` reach the data handler untouched.
pub fn classify(line: &str) -> ClassifiedLine {
    let tokens = tokenize(line);
    match tokens.as_slice() {
        [header, value] => ClassifiedLine {
            header: Header::key(*header),
            value: FieldValue::Single((*value).to_string()),
        },
        [header, rest @ ..] if !rest.is_empty() => ClassifiedLine {
            header: Header::key(*header),
            value: FieldValue::List(rest.iter().map(|t| (*t).to_string()).collect()),
        },
        _ => ClassifiedLine {
            header: Header::Data,
            value: FieldValue::Single(line.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_tokens_give_single_value() {
        let line = classify("PAL 0");
        assert_eq!(line.header, Header::key("PAL"));
        assert_eq!(line.value, FieldValue::Single("0".into()));
    }

    #[test]
    fn more_tokens_give_list_value() {
        let line = classify("EXT 0,0 1 15,15");
        assert_eq!(line.header, Header::key("EXT"));
        assert_eq!(line.value.tokens(), ["0,0", "1", "15,15"]);
    }

    #[test]
    fn single_token_is_data_with_whole_line() {
        let line = classify("0,82,204");
        assert_eq!(line.header, Header::Data);
        assert_eq!(line.value.as_single(), Some("0,82,204"));
    }

    #[test]
    fn tokenize_collapses_runs_of_whitespace() {
        assert_eq!(tokenize("NAME  my\troom"), vec!["NAME", "my", "room"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn joined_rebuilds_text() {
        let line = classify("NAME the tea room");
        assert_eq!(line.value.joined(), "the tea room");
        assert_eq!(line.value.as_single(), None);
    }

    #[test]
    fn header_display_uses_sentinel_for_data() {
        assert_eq!(Header::Data.to_string(), "_DATA");
        assert_eq!(Header::key("WAL").to_string(), "WAL");
    }
}
