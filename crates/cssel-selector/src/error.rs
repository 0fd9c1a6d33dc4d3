//! Selector parse errors.

use thiserror::Error;

/// A terminal failure of a single parse call.
///
/// Every variant carries the unconsumed input at the point of failure so
/// callers can point at the offending text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A name was required (after `.`, `#`, `:` or `::`) but none was found.
    #[error("expected name, found {remainder:?}")]
    MalformedName {
        /// Input from the expected name onward.
        remainder: String,
    },

    /// The contents of `[...]` do not form a valid attribute selector.
    #[error("malformed attribute selector: {remainder:?}")]
    MalformedAttribute {
        /// Input from just after the `[` onward.
        remainder: String,
    },

    /// Two combinators with no selector between them, as in `a > > b`.
    #[error("did not expect successive traversals: {remainder:?}")]
    SuccessiveTraversals {
        /// Input from the second combinator onward.
        remainder: String,
    },

    /// A comma-separated alternative, or the whole selector, is empty.
    #[error("empty sub-selector before {remainder:?}")]
    EmptySubSelector {
        /// Input from the point where a selector was expected.
        remainder: String,
    },

    /// The argument of `:not(...)` and friends starts with a quote.
    #[error("pseudo-selector :{name} cannot be quoted")]
    QuotedPseudoArgument {
        /// Lowercased pseudo-class name.
        name: String,
        /// Input from the quote onward.
        remainder: String,
    },

    /// A nested selector list is not followed by `)`.
    #[error("missing closing parenthesis in :{name} ({remainder:?})")]
    UnclosedParenthesis {
        /// Lowercased pseudo-class name.
        name: String,
        /// Input left after the nested selector list.
        remainder: String,
    },

    /// An opaque pseudo-class argument runs to the end of input.
    #[error("parenthesis not matched in :{name}")]
    UnmatchedParenthesis {
        /// Lowercased pseudo-class name.
        name: String,
        /// Input from the opening `(` onward.
        remainder: String,
    },

    /// The top-level parse stopped before the end of input.
    #[error("unmatched selector: {remainder:?}")]
    UnmatchedSelector {
        /// The text that could not be parsed.
        remainder: String,
    },
}

impl SelectorError {
    /// The unconsumed input at the point of failure.
    #[must_use]
    pub fn remainder(&self) -> &str {
        match self {
            Self::MalformedName { remainder }
            | Self::MalformedAttribute { remainder }
            | Self::SuccessiveTraversals { remainder }
            | Self::EmptySubSelector { remainder }
            | Self::QuotedPseudoArgument { remainder, .. }
            | Self::UnclosedParenthesis { remainder, .. }
            | Self::UnmatchedParenthesis { remainder, .. }
            | Self::UnmatchedSelector { remainder } => remainder,
        }
    }

    /// Byte offset of the failure within `input`, the text that was parsed.
    ///
    /// The remainder is always a suffix of the input, so this is the input
    /// length minus the remainder length. Returns `None` for unrelated input.
    #[must_use]
    pub fn offset(&self, input: &str) -> Option<usize> {
        input.strip_suffix(self.remainder()).map(str::len)
    }
}

/// Input that was accepted leniently rather than rejected.
///
/// Returned alongside a successful parse; the parser itself never prints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// A hex escape that is not a Unicode scalar value, kept as its digits.
    #[error("escape \\{hex} is not a code point, keeping it literally")]
    InvalidEscape {
        /// The escaped hex digits, without the backslash.
        hex: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_points_at_remainder() {
        let err = SelectorError::UnmatchedSelector {
            remainder: ")".to_string(),
        };
        assert_eq!(err.offset("a)"), Some(1));
        assert_eq!(err.offset("abc"), None);
    }

    #[test]
    fn test_messages() {
        let err = SelectorError::QuotedPseudoArgument {
            name: "not".to_string(),
            remainder: "'a')".to_string(),
        };
        assert_eq!(err.to_string(), "pseudo-selector :not cannot be quoted");

        let warning = ParseWarning::InvalidEscape {
            hex: "110000".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "escape \\110000 is not a code point, keeping it literally"
        );

        let err = SelectorError::MalformedName {
            remainder: "(".to_string(),
        };
        assert_eq!(err.to_string(), "expected name, found \"(\"");
    }
}
