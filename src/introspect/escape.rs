// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! XML text escaping.

use std::borrow::Cow;

/// Escape text for insertion into XML element content or attribute values.
///
/// Escapes `&`, `<`, `>`, `"` and control characters (other than tab,
/// newline, and carriage return, which are legal XML whitespace). Pure
/// function; returns the input unchanged when nothing needs escaping.
pub fn xml_escape(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c if is_escapable_control(c) => {
                out.push_str(&format!("&#x{:X};", c as u32));
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"') || is_escapable_control(c)
}

fn is_escapable_control(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(xml_escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn plain_text_is_borrowed_unchanged() {
        let text = "plain text with spaces";
        assert!(matches!(xml_escape(text), Cow::Borrowed(t) if t == text));
    }

    #[test]
    fn control_characters_become_character_references() {
        assert_eq!(xml_escape("a\u{0}b"), "a&#x0;b");
        assert_eq!(xml_escape("bell\u{7}"), "bell&#x7;");
    }

    #[test]
    fn xml_whitespace_passes_through() {
        assert_eq!(xml_escape("a\tb\nc\rd"), "a\tb\nc\rd");
    }
}
