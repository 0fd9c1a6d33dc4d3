//! CSS selector data model
//!
//! A parsed selector is a list of alternative groups, one per top-level
//! comma, each an ordered sequence of [`Selector`] tokens read left to right.
//! Combinators are tokens of their own ([`Selector::Traversal`]) rather than
//! links between compound selectors, so `div > .a` becomes
//! `[Tag(div), Traversal(Child), Attribute(class ~= a)]`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
///
/// One comma-separated alternative. Never empty once produced by the parser.
pub type SelectorGroup = Vec<Selector>;

/// The full result of a parse: one [`SelectorGroup`] per comma-separated
/// alternative, in source order.
pub type ParseResult = Vec<SelectorGroup>;

/// A single selector token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Selector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `svg`
    Tag {
        /// Element name, case-folded per the parse options.
        name: String,
    },

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    ///
    /// Example: `*`
    Universal,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The `#id` and `.class` shorthands are stored in this shape too:
    /// `#a` is `[id=a]` and `.a` is `[class~=a]`.
    Attribute {
        /// Attribute name, case-folded per the parse options.
        name: String,
        /// How the attribute value is compared.
        action: AttributeAction,
        /// Unescaped comparison value, empty for [`AttributeAction::Exists`].
        value: String,
        /// Set by the trailing `i` flag: `[lang=en i]`.
        #[serde(rename = "ignoreCase")]
        ignore_case: bool,
    },

    /// [§ 3.6 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-child(2n+1)`, `:not(.a, .b)`
    Pseudo {
        /// Lowercased pseudo-class name.
        name: String,
        /// Argument, if the pseudo-class was followed by parentheses.
        data: Option<PseudoData>,
    },

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::placeholder`
    PseudoElement {
        /// Lowercased pseudo-element name.
        name: String,
    },

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    Traversal {
        /// Relationship between the selectors on either side.
        kind: TraversalKind,
    },
}

impl Selector {
    /// Build a [`Selector::Tag`].
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag { name: name.into() }
    }

    /// Build a [`Selector::Attribute`].
    #[must_use]
    pub fn attribute(
        name: impl Into<String>,
        action: AttributeAction,
        value: impl Into<String>,
        ignore_case: bool,
    ) -> Self {
        Self::Attribute {
            name: name.into(),
            action,
            value: value.into(),
            ignore_case,
        }
    }

    /// Build a [`Selector::Pseudo`].
    #[must_use]
    pub fn pseudo(name: impl Into<String>, data: Option<PseudoData>) -> Self {
        Self::Pseudo {
            name: name.into(),
            data,
        }
    }

    /// Build a [`Selector::PseudoElement`].
    #[must_use]
    pub fn pseudo_element(name: impl Into<String>) -> Self {
        Self::PseudoElement { name: name.into() }
    }

    /// Build a [`Selector::Traversal`].
    #[must_use]
    pub const fn traversal(kind: TraversalKind) -> Self {
        Self::Traversal { kind }
    }

    /// Whether this token is a combinator.
    #[must_use]
    pub const fn is_traversal(&self) -> bool {
        matches!(self, Self::Traversal { .. })
    }
}

/// Argument of a functional pseudo-class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PseudoData {
    /// Opaque argument text, e.g. `2n+1` in `:nth-child(2n+1)`.
    ///
    /// Kept verbatim, except for `:contains` and `:icontains` where one pair of
    /// surrounding quotes is stripped and escapes are resolved.
    Raw(String),

    /// Nested selector list for the pseudo-classes in [`UNPACK_PSEUDOS`].
    Selectors(ParseResult),
}

/// [§ 6.1 Attribute presence and value selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
/// [§ 6.2 Substring matching attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-substrings)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttributeAction {
    /// `[attr]`
    Exists,
    /// `[attr=value]`, and the `#id` shorthand
    Equals,
    /// `[attr~=value]`, and the `.class` shorthand
    Element,
    /// `[attr^=value]`
    Start,
    /// `[attr$=value]`
    End,
    /// `[attr*=value]`
    Any,
    /// `[attr!=value]` (non-standard)
    Not,
    /// `[attr|=value]`
    Hyphen,
}

impl AttributeAction {
    /// Map the character written before `=` to an action.
    ///
    /// `None` means a bare `=`. Returns `None` for characters that are not
    /// attribute operators.
    #[must_use]
    pub const fn from_operator(operator: Option<char>) -> Option<Self> {
        match operator {
            None => Some(Self::Equals),
            Some('~') => Some(Self::Element),
            Some('^') => Some(Self::Start),
            Some('$') => Some(Self::End),
            Some('*') => Some(Self::Any),
            Some('!') => Some(Self::Not),
            Some('|') => Some(Self::Hyphen),
            Some(_) => None,
        }
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    /// Whitespace: `A B`
    Descendant,
    /// `A > B`
    Child,
    /// `A < B` (non-standard)
    Parent,
    /// `A ~ B`
    Sibling,
    /// `A + B`
    Adjacent,
}

impl TraversalKind {
    /// Map an explicit combinator symbol to its kind.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '>' => Some(Self::Child),
            '<' => Some(Self::Parent),
            '~' => Some(Self::Sibling),
            '+' => Some(Self::Adjacent),
            _ => None,
        }
    }
}

/// Pseudo-classes whose argument is itself a selector list.
pub const UNPACK_PSEUDOS: [&str; 6] = ["has", "not", "matches", "is", "host", "host-context"];

/// Pseudo-classes whose opaque argument has its quotes stripped and escapes resolved.
pub const STRIP_QUOTES_PSEUDOS: [&str; 2] = ["contains", "icontains"];

/// Whether `name` (already lowercased) takes a nested selector list.
#[must_use]
pub fn is_unpack_pseudo(name: &str) -> bool {
    UNPACK_PSEUDOS.contains(&name)
}

/// Whether `name` (already lowercased) has its argument unquoted and unescaped.
#[must_use]
pub fn strips_quotes(name: &str) -> bool {
    STRIP_QUOTES_PSEUDOS.contains(&name)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_traversal_symbols() {
        assert_eq!(TraversalKind::from_symbol('>'), Some(TraversalKind::Child));
        assert_eq!(TraversalKind::from_symbol('<'), Some(TraversalKind::Parent));
        assert_eq!(TraversalKind::from_symbol('~'), Some(TraversalKind::Sibling));
        assert_eq!(TraversalKind::from_symbol('+'), Some(TraversalKind::Adjacent));
        assert_eq!(TraversalKind::from_symbol(','), None);
    }

    #[test]
    fn test_attribute_operators() {
        assert_eq!(AttributeAction::from_operator(None), Some(AttributeAction::Equals));
        assert_eq!(AttributeAction::from_operator(Some('|')), Some(AttributeAction::Hyphen));
        assert_eq!(AttributeAction::from_operator(Some('!')), Some(AttributeAction::Not));
        assert_eq!(AttributeAction::from_operator(Some('%')), None);
    }

    #[test]
    fn test_names_round_trip_through_strum() {
        assert_eq!(AttributeAction::Element.to_string(), "element");
        assert_eq!(TraversalKind::Adjacent.as_ref(), "adjacent");
        assert_eq!(AttributeAction::from_str("hyphen"), Ok(AttributeAction::Hyphen));
        assert_eq!(TraversalKind::from_str("descendant"), Ok(TraversalKind::Descendant));
    }

    #[test]
    fn test_unpack_set_is_closed() {
        for name in UNPACK_PSEUDOS {
            assert!(is_unpack_pseudo(name));
        }
        assert!(!is_unpack_pseudo("where"));
        assert!(!is_unpack_pseudo("nth-child"));
        assert!(strips_quotes("icontains"));
        assert!(!strips_quotes("has"));
    }
}
