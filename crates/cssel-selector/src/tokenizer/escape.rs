/// Maximum number of hex digits in a single escape.
const MAX_HEX_DIGITS: usize = 6;

/// Interpret 1-6 hex digits as a code point.
///
/// Returns `None` when the digits are not valid hex or do not denote a
/// Unicode scalar value (surrogates, values above U+10FFFF). Zero decodes to
/// U+0000.
#[must_use]
pub fn decode_hex_escape(hex: &str) -> Option<char> {
    if hex.is_empty() || hex.len() > MAX_HEX_DIGITS {
        return None;
    }
    let code_point = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(code_point)
}

/// Count the hex digits (at most six) at the start of `input`.
pub(crate) fn hex_prefix_len(input: &str) -> usize {
    input
        .bytes()
        .take(MAX_HEX_DIGITS)
        .take_while(u8::is_ascii_hexdigit)
        .count()
}

/// Resolve every CSS escape in `text`.
///
/// - `\` followed by 1-6 hex digits and an optional whitespace character is
///   replaced by that code point.
/// - `\` followed by any other character is replaced by the character.
/// - A trailing lone `\` is kept.
///
/// Hex escapes that do not name a scalar value are passed through as their
/// hex digits. Use [`unescape_reporting`] to learn which ones.
#[must_use]
pub fn unescape(text: &str) -> String {
    unescape_reporting(text, &mut Vec::new())
}

/// Like [`unescape`], pushing the hex digits of every escape that was kept
/// literally onto `invalid`.
pub fn unescape_reporting(text: &str, invalid: &mut Vec<String>) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(slash) = rest.find('\\') {
        out.push_str(&rest[..slash]);
        rest = &rest[slash + 1..];

        let hex_len = hex_prefix_len(rest);
        if hex_len > 0 {
            let hex = &rest[..hex_len];
            rest = &rest[hex_len..];
            if let Some(c) = rest.chars().next().filter(|&c| super::is_whitespace(c)) {
                rest = &rest[c.len_utf8()..];
            }
            if let Some(c) = decode_hex_escape(hex) {
                out.push(c);
            } else {
                invalid.push(hex.to_string());
                out.push_str(hex);
            }
        } else if let Some(c) = rest.chars().next() {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        } else {
            out.push('\\');
        }
    }
    out.push_str(rest);
    out
}
