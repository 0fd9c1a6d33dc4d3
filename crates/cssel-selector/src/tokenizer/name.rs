use super::escape::hex_prefix_len;

/// [CSS Syntax Level 3 § 4.2 whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// Word characters, hyphen, and anything from U+00B0 upward.
#[must_use]
pub const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c >= '\u{B0}'
}

/// Byte length of the escape starting at `input`, which must begin with `\`.
///
/// Returns 0 when the backslash is the last character.
fn escape_len(input: &str) -> usize {
    let body = &input[1..];
    let hex_len = hex_prefix_len(body);
    if hex_len > 0 {
        let trailing = body[hex_len..]
            .chars()
            .next()
            .filter(|&c| is_whitespace(c))
            .map_or(0, char::len_utf8);
        return 1 + hex_len + trailing;
    }
    body.chars().next().map_or(0, |c| 1 + c.len_utf8())
}

/// Byte length of the longest name at the start of `input`, 0 if none.
///
/// A name is a run of name characters and escapes.
#[must_use]
pub fn scan_name(input: &str) -> usize {
    let mut len = 0;
    while let Some(c) = input[len..].chars().next() {
        if c == '\\' {
            let escaped = escape_len(&input[len..]);
            if escaped == 0 {
                break;
            }
            len += escaped;
        } else if is_name_char(c) {
            len += c.len_utf8();
        } else {
            break;
        }
    }
    len
}

/// Recognize a name at the start of `input`.
///
/// Returns the unescaped name and the number of bytes it occupied.
#[must_use]
pub fn consume_name(input: &str) -> Option<(String, usize)> {
    match scan_name(input) {
        0 => None,
        len => Some((super::unescape(&input[..len]), len)),
    }
}

/// Byte length of a quoted string's contents, `input` starting just after
/// the opening `quote`.
///
/// A backslash escapes the following character. Returns `None` if the
/// closing quote is missing.
#[must_use]
pub fn scan_quoted(input: &str, quote: char) -> Option<usize> {
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == quote {
            return Some(i);
        }
        if c == '\\' {
            let _ = chars.next()?;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_name_stops_at_delimiters() {
        assert_eq!(scan_name("foo.bar"), 3);
        assert_eq!(scan_name("data-x]"), 6);
        assert_eq!(scan_name("_a1 b"), 3);
        assert_eq!(scan_name(">a"), 0);
        assert_eq!(scan_name(""), 0);
    }

    #[test]
    fn test_scan_name_accepts_high_code_points() {
        assert_eq!(scan_name("héllo"), "héllo".len());
        assert_eq!(scan_name("日本 x"), "日本".len());
    }

    #[test]
    fn test_scan_name_includes_escapes() {
        assert_eq!(scan_name(r"a\.b c"), 4);
        assert_eq!(scan_name(r"\31 23 x"), 6);
        assert_eq!(scan_name("a\\"), 1);
    }

    #[test]
    fn test_consume_name_unescapes() {
        assert_eq!(consume_name(r"a\.b"), Some(("a.b".to_string(), 4)));
        assert_eq!(consume_name(r"\31 23"), Some(("123".to_string(), 6)));
        assert_eq!(consume_name("(x)"), None);
    }

    #[test]
    fn test_scan_quoted() {
        assert_eq!(scan_quoted(r#"abc" i]"#, '"'), Some(3));
        assert_eq!(scan_quoted(r"it\'s']", '\''), Some(5));
        assert_eq!(scan_quoted(r#"a'b"]"#, '"'), Some(3));
        assert_eq!(scan_quoted("open", '"'), None);
        assert_eq!(scan_quoted("a\\", '"'), None);
    }
}
