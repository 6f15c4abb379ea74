//! Name derivation for generated items.
//!
//! Catalog names are dotted, mixed-case strings (`chat.postMessage`,
//! `users.profile.get`). Type names are built with [`pascal_case`]; method
//! and field names are the snake_case of those, escaped when they collide
//! with a Rust keyword.

use heck::ToSnakeCase;
use proc_macro2::{Ident, Span};

/// Keywords that can be used as raw identifiers.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers; these get a trailing underscore.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Converts a dotted or underscored name to PascalCase.
///
/// `.` and `_` are separators and are dropped. The first character and the
/// first character after each separator are upper-cased; everything else is
/// kept as is.
///
/// ## Examples
///
/// ```
/// use methodgen_gen::naming::pascal_case;
///
/// assert_eq!(pascal_case("chat.postMessage"), "ChatPostMessage");
/// assert_eq!(pascal_case("a_b.c"), "ABC");
/// assert_eq!(pascal_case(""), "");
/// ```
pub fn pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = true;
    for c in s.chars() {
        if c == '.' || c == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Derives the singular form of a list argument name.
///
/// Strips a trailing `es`, otherwise a trailing `s`. Names the heuristic
/// gets wrong (`names` becomes `nam`) should carry a `singular` override
/// in the catalog.
///
/// ## Examples
///
/// ```
/// use methodgen_gen::naming::singularize;
///
/// assert_eq!(singularize("attachments"), "attachment");
/// assert_eq!(singularize("matches"), "match");
/// assert_eq!(singularize("data"), "data");
/// ```
pub fn singularize(name: &str) -> &str {
    name.strip_suffix("es")
        .or_else(|| name.strip_suffix('s'))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(name)
}

/// Returns the snake_case form of a catalog name.
pub fn snake_case(s: &str) -> String {
    pascal_case(s).to_snake_case()
}

/// Returns true if `s` is a plain identifier once keywords are escaped.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Returns true if `name` is a keyword that cannot be a raw identifier.
pub fn is_path_keyword(name: &str) -> bool {
    PATH_KEYWORDS.contains(&name)
}

/// Builds an identifier from `name`, escaping Rust keywords.
///
/// Callers must ensure [`is_identifier`] holds for `name`.
pub fn rust_ident(name: &str) -> Ident {
    if is_path_keyword(name) {
        Ident::new(&format!("{}_", name), Span::call_site())
    } else if RAW_KEYWORDS.contains(&name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}

/// Builds the snake_case identifier for a catalog name.
pub fn snake_ident(name: &str) -> Ident {
    rust_ident(&snake_case(name))
}
