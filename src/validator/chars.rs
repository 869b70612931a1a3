//! Character classes shared by the pattern rules.
//!
//! `\w`, `\d` and `\s` are Unicode-aware in the `regex` crate; the rules
//! here are ASCII-only, so classes are spelled out.

/// Allowed unquoted local characters (atext, `.` and space).
pub(crate) const ATEXT: &str = r"0-9A-Za-z_.!#$%\&'*+\-/=?\^`{|} \~";

/// `ATEXT` plus the specials accepted inside a fully quoted local part.
pub(crate) const QTEXT: &str = r"0-9A-Za-z_.!#$%\&'*+\-/=?\^`{|} \~(),:;<>@\[\]";

/// `QTEXT` plus `"` and `\`, accepted in the quoted segment of a mixed local part.
pub(crate) const MIXED_QTEXT: &str = r#"0-9A-Za-z_.!#$%\&'*+\-/=?\^`{|} \~"(),:;<>\\@\[\]"#;

pub(crate) const NON_ASCII: &str = r"[^\x00-\x7F]";

/// Any character that stays on the current line.
pub(crate) const ON_LINE: &str = r"[^\n\r\x{2028}\x{2029}]";

pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whitespace as browsers understand it: Unicode `White_Space` without
/// U+0085, plus the byte order mark.
pub(crate) fn is_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

pub(crate) fn starts_with_whitespace(s: &str) -> bool {
    s.chars().next().is_some_and(is_whitespace)
}

/// Length in UTF-16 code units, the unit every length limit is expressed in.
pub(crate) fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Characters of `s` up to (not including) the first line terminator.
pub(crate) fn first_line(s: &str) -> &str {
    match s.find(is_line_terminator) {
        Some(idx) => &s[..idx],
        None => s,
    }
}
