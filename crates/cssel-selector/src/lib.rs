//! CSS selector parsing for the cssel toolkit.
//!
//! # Scope
//!
//! This crate turns selector text into a two-level structure: a list of
//! comma-separated alternatives, each an ordered sequence of tokens.
//!
//! - **Name/Escape Lexer** ([CSS Syntax Level 3 § 4.3.7](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point))
//!   - Identifier-like names with hex and literal escapes
//!   - Lenient pass-through of hex escapes that are not code points
//!
//! - **Selector Parser** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, universal, ID, class and attribute selectors
//!   - All attribute operators plus the non-standard `!=`, and the `i` flag
//!   - Pseudo-classes with opaque or nested selector-list arguments
//!   - Pseudo-elements
//!   - Descendant, child, parent, sibling and adjacent combinators
//!
//! # Not Implemented
//!
//! - Matching selectors against a document
//! - Serializing selectors back to text
//! - Namespace prefixes
//!
//! # Example
//!
//! ```
//! use cssel_selector::{AttributeAction, Selector, TraversalKind, parse};
//!
//! let groups = parse("a > .b").unwrap();
//! assert_eq!(
//!     groups,
//!     vec![vec![
//!         Selector::tag("a"),
//!         Selector::traversal(TraversalKind::Child),
//!         Selector::attribute("class", AttributeAction::Element, "b", false),
//!     ]]
//! );
//! ```

/// Parse errors.
pub mod error;
/// Case-folding configuration.
pub mod options;
/// Recursive-descent selector parser.
pub mod parser;
/// Selector token types.
pub mod selector;
/// Name and escape lexer.
pub mod tokenizer;

pub use error::{ParseWarning, SelectorError};
pub use options::ParseOptions;
pub use parser::SelectorParser;
pub use selector::{
    AttributeAction, ParseResult, PseudoData, Selector, SelectorGroup, TraversalKind,
};
pub use tokenizer::{decode_hex_escape, unescape, unescape_reporting};

/// Parse `selector` with default options.
///
/// # Errors
///
/// Returns a [`SelectorError`] if the text is not a valid selector list.
pub fn parse(selector: &str) -> Result<ParseResult, SelectorError> {
    parse_with_options(selector, &ParseOptions::default())
}

/// Parse `selector` with the given case-folding options.
///
/// # Errors
///
/// Returns a [`SelectorError`] if the text is not a valid selector list.
pub fn parse_with_options(
    selector: &str,
    options: &ParseOptions,
) -> Result<ParseResult, SelectorError> {
    SelectorParser::new(selector, *options).parse()
}

/// Parse `selector`, also returning any input that was accepted leniently.
///
/// Each call is independent: the warnings describe this input only.
///
/// # Errors
///
/// Returns a [`SelectorError`] if the text is not a valid selector list.
pub fn parse_with_warnings(
    selector: &str,
    options: &ParseOptions,
) -> Result<(ParseResult, Vec<ParseWarning>), SelectorError> {
    SelectorParser::new(selector, *options).parse_with_warnings()
}
