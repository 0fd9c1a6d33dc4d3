//! Selector parser module.

/// Recursive-descent selector parser.
pub mod selector_parser;

pub use selector_parser::SelectorParser;
