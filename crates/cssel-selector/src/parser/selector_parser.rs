//! Recursive-descent selector parser.
//!
//! The parser keeps a single cursor into the immutable input. Nested
//! selector lists inside `:not(...)` and friends are parsed by the same
//! method on the same cursor, so after a nested call returns the cursor sits
//! on whatever the nested list could not consume (normally the closing `)`).

use crate::error::{ParseWarning, SelectorError};
use crate::options::ParseOptions;
use crate::selector::{
    AttributeAction, ParseResult, PseudoData, Selector, SelectorGroup, TraversalKind,
    is_unpack_pseudo, strips_quotes,
};
use crate::tokenizer::{is_whitespace, scan_name, scan_quoted, unescape_reporting};

/// Selector parser over a borrowed input string.
pub struct SelectorParser<'a> {
    /// The full selector text
    input: &'a str,
    /// Byte offset of the cursor
    position: usize,
    /// Case-folding configuration
    options: ParseOptions,
    /// Lenient input accepted so far
    warnings: Vec<ParseWarning>,
}

impl<'a> SelectorParser<'a> {
    /// Create a parser positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            position: 0,
            options,
            warnings: Vec::new(),
        }
    }

    /// Parse the whole input as a comma-separated selector list.
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectorError`] encountered, or
    /// [`SelectorError::UnmatchedSelector`] if the list ends before the input
    /// does (for example on a stray `)`).
    pub fn parse(self) -> Result<ParseResult, SelectorError> {
        self.parse_with_warnings().map(|(groups, _)| groups)
    }

    /// Like [`SelectorParser::parse`], also returning the lenient input that
    /// was accepted, in source order.
    ///
    /// # Errors
    ///
    /// Same as [`SelectorParser::parse`].
    pub fn parse_with_warnings(
        mut self,
    ) -> Result<(ParseResult, Vec<ParseWarning>), SelectorError> {
        let mut groups = Vec::new();
        self.parse_selector_list(&mut groups)?;

        if self.position < self.input.len() {
            return Err(SelectorError::UnmatchedSelector {
                remainder: self.rest().to_string(),
            });
        }
        Ok((groups, self.warnings))
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Move the cursor forward by `len` bytes.
    const fn advance(&mut self, len: usize) {
        self.position += len;
    }

    fn consume_whitespace(&mut self) {
        let skipped = self
            .rest()
            .find(|c: char| !is_whitespace(c))
            .unwrap_or_else(|| self.rest().len());
        self.advance(skipped);
    }

    /// Resolve escapes in `raw`, recording any that were kept literally.
    fn unescape(&mut self, raw: &str) -> String {
        let mut invalid = Vec::new();
        let text = unescape_reporting(raw, &mut invalid);
        self.warnings.extend(
            invalid
                .into_iter()
                .map(|hex| ParseWarning::InvalidEscape { hex }),
        );
        text
    }

    /// Consume a name at the cursor if there is one, unescaped.
    fn try_consume_name(&mut self) -> Option<String> {
        let len = scan_name(self.rest());
        if len == 0 {
            return None;
        }
        let raw = &self.rest()[..len];
        let name = self.unescape(raw);
        self.advance(len);
        Some(name)
    }

    /// Consume a name at the cursor, unescaped.
    fn consume_name(&mut self) -> Result<String, SelectorError> {
        self.try_consume_name().ok_or_else(|| SelectorError::MalformedName {
            remainder: self.rest().to_string(),
        })
    }

    /// Parse one selector list into `groups`.
    ///
    /// Stops at the end of input or at the first character that cannot start
    /// a selector token, leaving the cursor on it. Each level of `:not(...)`
    /// nesting costs one level of call stack, so recursion depth is bounded
    /// by the input length.
    fn parse_selector_list(&mut self, groups: &mut ParseResult) -> Result<(), SelectorError> {
        let mut tokens: SelectorGroup = Vec::new();
        let mut saw_whitespace = false;

        self.consume_whitespace();

        while let Some(c) = self.peek() {
            if is_whitespace(c) {
                saw_whitespace = true;
                self.consume_whitespace();
            } else if let Some(kind) = TraversalKind::from_symbol(c) {
                self.push_traversal(&mut tokens, kind)?;
                saw_whitespace = false;
                self.advance(c.len_utf8());
                self.consume_whitespace();
            } else if c == ',' {
                self.finish_group(groups, std::mem::take(&mut tokens))?;
                saw_whitespace = false;
                self.advance(1);
                self.consume_whitespace();
            } else {
                let mut pushed_descendant = false;
                if saw_whitespace {
                    if !tokens.is_empty() {
                        self.push_traversal(&mut tokens, TraversalKind::Descendant)?;
                        pushed_descendant = true;
                    }
                    saw_whitespace = false;
                }

                if let Some(token) = self.consume_token(c)? {
                    tokens.push(token);
                } else {
                    // Whitespace before a closing delimiter is not a combinator.
                    if pushed_descendant {
                        let _ = tokens.pop();
                    }
                    return self.finish_group(groups, tokens);
                }
            }
        }

        self.finish_group(groups, tokens)
    }

    fn push_traversal(
        &self,
        tokens: &mut SelectorGroup,
        kind: TraversalKind,
    ) -> Result<(), SelectorError> {
        if tokens.last().is_some_and(Selector::is_traversal) {
            return Err(SelectorError::SuccessiveTraversals {
                remainder: self.rest().to_string(),
            });
        }
        tokens.push(Selector::traversal(kind));
        Ok(())
    }

    fn finish_group(
        &self,
        groups: &mut ParseResult,
        tokens: SelectorGroup,
    ) -> Result<(), SelectorError> {
        if tokens.is_empty() {
            return Err(SelectorError::EmptySubSelector {
                remainder: self.rest().to_string(),
            });
        }
        groups.push(tokens);
        Ok(())
    }

    /// Consume the token starting with `c`, or return `None` without moving
    /// the cursor if `c` cannot start one.
    fn consume_token(&mut self, c: char) -> Result<Option<Selector>, SelectorError> {
        let token = match c {
            // [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
            '*' => {
                self.advance(1);
                Selector::Universal
            }

            // [§ 6.7 ID selectors](https://www.w3.org/TR/selectors-4/#id-selectors)
            '#' => {
                self.advance(1);
                let value = self.consume_name()?;
                Selector::attribute("id", AttributeAction::Equals, value, false)
            }

            // [§ 6.6 Class selectors](https://www.w3.org/TR/selectors-4/#class-html)
            '.' => {
                self.advance(1);
                let value = self.consume_name()?;
                Selector::attribute("class", AttributeAction::Element, value, false)
            }

            // [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
            '[' => {
                self.advance(1);
                self.consume_attribute()?
            }

            // [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
            ':' if self.peek_at(1) == Some(':') => {
                self.advance(2);
                let name = self.consume_name()?.to_lowercase();
                Selector::pseudo_element(name)
            }

            // [§ 3.6 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
            ':' => {
                self.advance(1);
                self.consume_pseudo()?
            }

            // [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
            _ => {
                let Some(name) = self.try_consume_name() else {
                    return Ok(None);
                };
                if self.options.folds_tags() {
                    Selector::tag(name.to_lowercase())
                } else {
                    Selector::tag(name)
                }
            }
        };
        Ok(Some(token))
    }

    /// Parse the inside of `[...]`, the cursor just past the `[`.
    fn consume_attribute(&mut self) -> Result<Selector, SelectorError> {
        let start = self.position;
        self.consume_attribute_body().ok_or_else(|| SelectorError::MalformedAttribute {
            remainder: self.input[start..].to_string(),
        })
    }

    /// `ws* name ws* ( op? '=' ws* value )? ws* 'i'? ']'`
    fn consume_attribute_body(&mut self) -> Option<Selector> {
        self.consume_whitespace();

        let name = self.try_consume_name()?;
        let name = if self.options.folds_attribute_names() {
            name.to_lowercase()
        } else {
            name
        };

        self.consume_whitespace();

        let (action, value) = match (self.peek(), self.peek_at(1)) {
            (Some('='), _) => {
                self.advance(1);
                (AttributeAction::Equals, self.consume_attribute_value()?)
            }
            (Some(op), Some('=')) if op != ']' => {
                let action = AttributeAction::from_operator(Some(op))?;
                self.advance(op.len_utf8() + 1);
                (action, self.consume_attribute_value()?)
            }
            _ => (AttributeAction::Exists, String::new()),
        };

        self.consume_whitespace();
        let ignore_case = self.peek() == Some('i');
        if ignore_case {
            self.advance(1);
        }

        if self.peek() != Some(']') {
            return None;
        }
        self.advance(1);

        Some(Selector::attribute(name, action, value, ignore_case))
    }

    /// A quoted string or an unquoted name (optionally `#`-prefixed, possibly
    /// empty), returned unescaped.
    fn consume_attribute_value(&mut self) -> Option<String> {
        self.consume_whitespace();

        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.advance(1);
                let len = scan_quoted(self.rest(), quote)?;
                let raw = &self.rest()[..len];
                let value = self.unescape(raw);
                self.advance(len + 1);
                Some(value)
            }
            _ => {
                let hash = usize::from(self.peek() == Some('#'));
                let len = hash + scan_name(&self.rest()[hash..]);
                let raw = &self.rest()[..len];
                let value = self.unescape(raw);
                self.advance(len);
                Some(value)
            }
        }
    }

    /// Parse a pseudo-class, the cursor just past the `:`.
    fn consume_pseudo(&mut self) -> Result<Selector, SelectorError> {
        let name = self.consume_name()?.to_lowercase();

        if self.peek() != Some('(') {
            return Ok(Selector::pseudo(name, None));
        }

        let data = if is_unpack_pseudo(&name) {
            if matches!(self.peek_at(1), Some('"' | '\'')) {
                return Err(SelectorError::QuotedPseudoArgument {
                    name,
                    remainder: self.rest()[1..].to_string(),
                });
            }
            self.advance(1);

            let mut nested = Vec::new();
            self.parse_selector_list(&mut nested)?;

            if self.peek() != Some(')') {
                return Err(SelectorError::UnclosedParenthesis {
                    name,
                    remainder: self.rest().to_string(),
                });
            }
            self.advance(1);
            PseudoData::Selectors(nested)
        } else {
            let Some(len) = balanced_parens_len(self.rest()) else {
                return Err(SelectorError::UnmatchedParenthesis {
                    name,
                    remainder: self.rest().to_string(),
                });
            };
            let raw = &self.rest()[1..len - 1];
            let data = if strips_quotes(&name) {
                self.unescape(strip_quotes(raw))
            } else {
                raw.to_string()
            };
            self.advance(len);
            PseudoData::Raw(data)
        };

        Ok(Selector::pseudo(name, Some(data)))
    }
}

/// Byte length of the parenthesized run at the start of `input` (which must
/// start with `(`), including both parentheses. Escaped parentheses do not
/// count. Returns `None` if the input ends first.
fn balanced_parens_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut depth = 1usize;
    let mut pos = 1;

    while depth > 0 && pos < bytes.len() {
        match bytes[pos] {
            b'(' if !is_escaped(bytes, pos) => depth += 1,
            b')' if !is_escaped(bytes, pos) => depth -= 1,
            _ => {}
        }
        pos += 1;
    }

    (depth == 0).then_some(pos)
}

/// A character is escaped when an odd number of backslashes precede it.
fn is_escaped(bytes: &[u8], pos: usize) -> bool {
    bytes[..pos].iter().rev().take_while(|&&b| b == b'\\').count() % 2 == 1
}

/// Remove one pair of matching surrounding quotes, if present.
fn strip_quotes(raw: &str) -> &str {
    match (raw.chars().next(), raw.chars().next_back()) {
        (Some(first @ ('"' | '\'')), Some(last)) if first == last => {
            raw.get(1..raw.len() - 1).unwrap_or("")
        }
        _ => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_parens_len() {
        assert_eq!(balanced_parens_len("(2n+1)"), Some(6));
        assert_eq!(balanced_parens_len("(a(b)c) d"), Some(7));
        assert_eq!(balanced_parens_len(r"(a\)b)"), Some(6));
        assert_eq!(balanced_parens_len(r"(a\\)b)"), Some(5));
        assert_eq!(balanced_parens_len("(open"), None);
        assert_eq!(balanced_parens_len("("), None);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("'a'"), "a");
        assert_eq!(strip_quotes("\"a b\""), "a b");
        assert_eq!(strip_quotes("'a\""), "'a\"");
        assert_eq!(strip_quotes("a"), "a");
        assert_eq!(strip_quotes("'"), "");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn test_cursor_stops_at_closing_paren() {
        let mut parser = SelectorParser::new("a, b ) c", ParseOptions::default());
        let mut groups = Vec::new();
        parser.parse_selector_list(&mut groups).unwrap();
        assert_eq!(groups, vec![vec![Selector::tag("a")], vec![Selector::tag("b")]]);
        assert_eq!(parser.rest(), ") c");
    }
}
