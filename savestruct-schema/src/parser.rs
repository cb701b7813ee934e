//! Record extraction and field parsing.
//!
//! This is deliberately not a C parser. Record definitions are located by
//! pattern over comment-free text, and each body line is matched against
//! `<type words> [*...] <name> [ '[' size ']' ] ;`. Anything that does not
//! fit is skipped.

use crate::ir::{FieldDef, RecordDef, RecordForm, SchemaIr};
use crate::scanner::strip_comments;
use crate::types::CanonicalType;

/// Words dropped from a type before canonicalization.
const QUALIFIERS: &[&str] = &["const", "volatile", "struct", "union", "enum"];

/// Characters that rule a line out as a single plain field declaration.
const REJECT_CHARS: &[char] = &[',', ':', '(', ')', '=', '{', '}', '#', '"', '\''];

/// A record definition located in the source, before field parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Record name.
    pub name: String,
    /// Struct tag of a typedef, if it has one.
    pub tag: Option<String>,
    /// Declaration form.
    pub form: RecordForm,
    /// Text between the braces.
    pub body: String,
    /// 1-based line of the `struct` keyword.
    pub line: usize,
}

impl RawRecord {
    /// Parses the body into a record definition.
    #[must_use]
    pub fn into_record(self) -> RecordDef {
        let fields = parse_fields(&self.body);
        RecordDef {
            name: self.name,
            tag: self.tag,
            form: self.form,
            fields,
            line: self.line,
        }
    }
}

/// Parses a whole header into records.
///
/// Never fails: unmatched text and unparsable lines are ignored.
///
/// # Arguments
/// * `source` - Header text, comments included
#[must_use]
pub fn parse_header(source: &str) -> SchemaIr {
    let ir: SchemaIr = extract_records(source)
        .into_iter()
        .map(RawRecord::into_record)
        .collect();
    tracing::debug!("extracted {} records", ir.len());
    ir
}

/// Locates record definitions in `source`, in order of appearance.
///
/// Comments are stripped first, so braces inside comments never end a body.
/// Both `typedef struct [tag] { ... } name ...;` and a line-leading
/// `struct name { ... };` are recognized. Bodies containing a nested `{`
/// are rejected.
#[must_use]
pub fn extract_records(source: &str) -> Vec<RawRecord> {
    let text = strip_comments(source);
    let mut cursor = Cursor::new(&text);
    let mut records = Vec::new();

    while let Some(start) = cursor.find_keyword("struct") {
        let after_keyword = start + "struct".len();
        let form = if preceded_by_typedef(&text, start) {
            Some(RecordForm::Typedef)
        } else if at_line_start(&text, start) {
            Some(RecordForm::Struct)
        } else {
            None
        };

        let matched = form.and_then(|form| {
            cursor.pos = after_keyword;
            match_record(&mut cursor, form)
        });

        match matched {
            Some((name, tag, body)) => {
                let line = line_of(&text, start);
                tracing::trace!("record '{}' at line {}", name, line);
                records.push(RawRecord {
                    name,
                    tag,
                    form: form.unwrap_or_default(),
                    body,
                    line,
                });
            }
            None => cursor.pos = after_keyword,
        }
    }

    records
}

/// Matches the remainder of a record definition after the `struct` keyword.
///
/// On success the cursor is left after the terminating `;`.
fn match_record(
    cursor: &mut Cursor<'_>,
    form: RecordForm,
) -> Option<(String, Option<String>, String)> {
    cursor.skip_whitespace();
    let tag = cursor.identifier();
    if form == RecordForm::Struct && tag.is_none() {
        return None;
    }

    cursor.skip_whitespace();
    if !cursor.eat('{') {
        return None;
    }
    let body_start = cursor.pos;
    let body_end = body_start + cursor.rest().find('}')?;
    let body = &cursor.text[body_start..body_end];
    if body.contains('{') {
        tracing::debug!(
            "skipping struct {} with nested braces",
            tag.unwrap_or("<anonymous>")
        );
        return None;
    }
    cursor.pos = body_end + 1;
    cursor.skip_whitespace();

    match form {
        RecordForm::Typedef => {
            let name = cursor.identifier()?;
            let semi = cursor.rest().find(';')?;
            cursor.pos += semi + 1;
            Some((
                name.to_string(),
                tag.map(str::to_string),
                body.to_string(),
            ))
        }
        RecordForm::Struct => {
            if !cursor.eat(';') {
                return None;
            }
            Some((tag?.to_string(), None, body.to_string()))
        }
    }
}

/// Parses the fields of a comment-free record body.
///
/// Lines that are not a single plain field declaration are skipped.
#[must_use]
pub fn parse_fields(body: &str) -> Vec<FieldDef> {
    body.lines().filter_map(parse_field_line).collect()
}

/// Parses one line as a field declaration.
///
/// Returns `None` for blank lines, stray braces, multiple declarators,
/// bit-fields, function pointers, initializers and multi-dimensional arrays.
/// Text after the first `;` is ignored.
#[must_use]
pub fn parse_field_line(line: &str) -> Option<FieldDef> {
    let line = line.trim();
    let decl = line[..line.find(';')?].trim();
    if decl.is_empty() || decl.contains(REJECT_CHARS) {
        if !decl.is_empty() {
            tracing::trace!("skipping line: {}", line);
        }
        return None;
    }

    let (decl, size) = match decl.find('[') {
        Some(open) => {
            let size = decl.strip_suffix(']')?.get(open + 1..)?.trim();
            if size.is_empty() || size.contains(['[', ']']) {
                tracing::trace!("skipping array declaration: {}", line);
                return None;
            }
            (decl[..open].trim_end(), Some(size))
        }
        None => (decl, None),
    };

    let name_start = decl
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let name = &decl[name_start..];
    if !is_identifier(name) {
        return None;
    }

    let head = &decl[..name_start];
    let pointer_depth = head.matches('*').count();
    let type_text = head.replace('*', " ");
    let tokens: Vec<&str> = type_text
        .split_whitespace()
        .filter(|t| !QUALIFIERS.contains(t))
        .collect();
    if tokens.is_empty() || !tokens.iter().all(|t| is_identifier(t)) {
        return None;
    }

    Some(FieldDef::new(
        name,
        CanonicalType::from_declaration(&tokens, pointer_depth, size),
    ))
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(is_ident_char),
        _ => false,
    }
}

fn preceded_by_typedef(text: &str, pos: usize) -> bool {
    let before = text[..pos].trim_end();
    before
        .strip_suffix("typedef")
        .is_some_and(|rest| !rest.ends_with(is_ident_char))
}

fn at_line_start(text: &str, pos: usize) -> bool {
    let line_start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..pos].trim().is_empty()
}

fn line_of(text: &str, pos: usize) -> usize {
    text[..pos].matches('\n').count() + 1
}

/// Byte cursor over comment-free text.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn identifier(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
        let ident = &rest[..len];
        if is_identifier(ident) {
            self.pos += len;
            Some(ident)
        } else {
            None
        }
    }

    /// Advances to the next whole-word occurrence of `word` and returns its
    /// offset, leaving the cursor on it.
    fn find_keyword(&mut self, word: &str) -> Option<usize> {
        loop {
            let found = self.pos + self.rest().find(word)?;
            let end = found + word.len();
            let before_ok = !self.text[..found].ends_with(is_ident_char);
            let after_ok = !self.text[end..].starts_with(is_ident_char);
            if before_ok && after_ok {
                self.pos = found;
                return Some(found);
            }
            self.pos = end;
        }
    }
}
