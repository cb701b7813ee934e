//! Rust identifiers and const expressions.

/// Keywords that may be used as raw identifiers.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "Self", "super", "_"];

/// Turns a C identifier into a usable Rust identifier.
///
/// Keywords become raw identifiers (`type` becomes `r#type`). The few that
/// cannot be raw get a trailing underscore.
#[must_use]
pub fn escape_ident(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("{}_", name)
    } else if KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Formats a C size expression as a const generic argument.
///
/// Plain integer literals are used as is, anything else is braced.
#[must_use]
pub fn const_arg(expr: &str) -> String {
    let expr = expr.trim();
    if !expr.is_empty() && expr.bytes().all(|b| b.is_ascii_digit()) {
        expr.to_string()
    } else {
        format!("{{ {} }}", expr)
    }
}
