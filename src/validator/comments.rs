use once_cell::sync::Lazy;
use regex::Regex;

use super::chars::ON_LINE;

static QUOTED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r#""{ON_LINE}+""#)).expect("valid quoted run regex"));

static COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\({ON_LINE}+\)|\({ON_LINE}+\)@")).expect("valid comment regex")
});

/// `(comment)local@domain` or `local(comment)@domain`.
///
/// Quoted runs are masked first so parentheses inside `"..."` do not count.
/// The domain is not inspected at all.
pub fn has_valid_comment_form(address: &str) -> bool {
    let masked = QUOTED_RUN.replace_all(address, "-");
    COMMENT.is_match(&masked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_before_at_or_at_start() {
        assert!(has_valid_comment_form("john.smith(comment)@example.com"));
        assert!(has_valid_comment_form("(comment)john.smith@example.com"));
        assert!(has_valid_comment_form(
            "\"()<>[]:,;@\\\\\\\"!#$%&'*+-/=?^_`{}| ~.a\"(comment)@example.org"
        ));
    }

    #[test]
    fn parentheses_inside_quotes_are_masked() {
        assert!(!has_valid_comment_form("\"(a)\"@ex.com"));
    }

    #[test]
    fn empty_or_trailing_comments_do_not_count() {
        assert!(!has_valid_comment_form("()@x.com"));
        assert!(!has_valid_comment_form("email@example.com (Joe)"));
    }

    #[test]
    fn domain_is_not_required() {
        assert!(has_valid_comment_form("(comment)john"));
        assert!(has_valid_comment_form("x(a)@"));
    }
}
