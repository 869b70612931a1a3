use once_cell::sync::Lazy;
use regex::Regex;

use super::chars::{ON_LINE, is_line_terminator, starts_with_whitespace};
use super::types::BlacklistRule;

// '@' (puis '[' optionnel) suivi d'un chiffre, puis 4+ chiffres sur la même
// ligne, ce premier chiffre compris.
static NUMERIC_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"@\[?[0-9](?:[0-9]{{3}}|{ON_LINE}*[0-9]{{4}})"))
        .expect("valid numeric run regex")
});

/// First rejection rule the address trips. A blacklisted address is never
/// valid, whatever the other predicates say.
pub fn blacklist_rule(address: &str) -> Option<BlacklistRule> {
    if address.starts_with('@') {
        Some(BlacklistRule::LeadingAt)
    } else if starts_with_whitespace(address) {
        Some(BlacklistRule::LeadingWhitespace)
    } else if NUMERIC_RUN.is_match(address) {
        Some(BlacklistRule::NumericRun)
    } else if has_unescaped_quote_pair(address) {
        Some(BlacklistRule::UnescapedQuotePair)
    } else {
        None
    }
}

pub fn is_blacklisted(address: &str) -> bool {
    blacklist_rule(address).is_some()
}

/// A `"` followed on the same line by two more `"`, each at least one
/// character further, unless a `\"` shows up on that line after the opening
/// quote's next character.
fn has_unescaped_quote_pair(address: &str) -> bool {
    address
        .split(is_line_terminator)
        .any(line_has_unescaped_quote_pair)
}

fn line_has_unescaped_quote_pair(line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    let quotes: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter_map(|(idx, c)| (*c == '"').then_some(idx))
        .collect();
    let Some(&last_quote) = quotes.last() else {
        return false;
    };
    let last_escape = chars.windows(2).rposition(|w| w == ['\\', '"']);

    quotes.iter().any(|&open| {
        if last_escape.is_some_and(|esc| esc >= open + 2) {
            return false;
        }
        let next = quotes.partition_point(|&q| q < open + 2);
        quotes.get(next).is_some_and(|&inner| last_quote >= inner + 2)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_at_and_whitespace() {
        assert_eq!(blacklist_rule("@example.com"), Some(BlacklistRule::LeadingAt));
        assert_eq!(
            blacklist_rule(" email@example.com"),
            Some(BlacklistRule::LeadingWhitespace)
        );
        assert_eq!(
            blacklist_rule("\u{3000}email@example.com"),
            Some(BlacklistRule::LeadingWhitespace)
        );
    }

    #[test]
    fn numeric_runs_after_at() {
        assert_eq!(blacklist_rule("email@1234.com"), Some(BlacklistRule::NumericRun));
        assert_eq!(
            blacklist_rule("email@111.222.333.44444"),
            Some(BlacklistRule::NumericRun)
        );
        assert_eq!(blacklist_rule("ab@[1234.1.1.1]"), Some(BlacklistRule::NumericRun));
        // le domaine doit commencer par un chiffre
        assert_eq!(blacklist_rule("email@example.com1234"), None);
        assert_eq!(blacklist_rule("email@123.123.123.123"), None);
        assert_eq!(blacklist_rule("1234567890@example.com"), None);
    }

    #[test]
    fn numeric_run_stays_on_one_line() {
        assert_eq!(blacklist_rule("ab@1x\n2345"), None);
        assert_eq!(blacklist_rule("ab@1x2345"), Some(BlacklistRule::NumericRun));
    }

    #[test]
    fn back_to_back_quoted_runs() {
        assert_eq!(
            blacklist_rule("\"a\"b\"c\"@example.com"),
            Some(BlacklistRule::UnescapedQuotePair)
        );
        assert_eq!(blacklist_rule("\"much.more unusual\"@example.com"), None);
        assert_eq!(blacklist_rule("abc.\"defghi\".xyz@example.com"), None);
    }

    #[test]
    fn escaped_quote_disarms_quote_pair() {
        assert_eq!(blacklist_rule("a\"b\"c\\\"d\"e@x"), None);
        assert_eq!(
            blacklist_rule("\"()<>[]:,;@\\\\\\\"!#$%&'*+-/=?^_`{}| ~.a\"@example.org"),
            None
        );
    }
}
