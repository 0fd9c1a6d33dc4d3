//! Name and escape lexer.
//!
//! The parser never tokenizes the whole input up front. It asks this module
//! to recognize one lexical unit at the start of the remaining input and
//! advances past it.

/// CSS escape decoding per [CSS Syntax Level 3 § 4.3.7](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point).
pub mod escape;
/// Identifier-like names and quoted strings.
pub mod name;

pub use escape::{decode_hex_escape, unescape, unescape_reporting};
pub use name::{consume_name, is_name_char, is_whitespace, scan_name, scan_quoted};
