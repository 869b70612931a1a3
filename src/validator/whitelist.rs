use once_cell::sync::Lazy;
use regex::Regex;

use super::chars::{ON_LINE, starts_with_whitespace};
use super::domain::{has_bracketed_literal, is_host_domain};
use super::local::{is_dot_atom_local, is_mixed_quoted_local, is_quoted_local};
use super::parts::split_borrowed;
use super::types::WhitelistShape;

static QUOTED_FALLBACK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r#"^"{ON_LINE}+"@{ON_LINE}"#)).expect("valid quoted fallback regex")
});

/// First known-good shape the address matches, in rule order.
pub fn whitelist_shape(address: &str) -> Option<WhitelistShape> {
    if starts_with_whitespace(address) {
        return Some(WhitelistShape::LeadingWhitespace);
    }
    if let Some(shape) = hosted_local_shape(address) {
        return Some(shape);
    }
    if QUOTED_FALLBACK.is_match(address) {
        return Some(WhitelistShape::QuotedFallback);
    }
    if has_bracketed_literal(address) {
        return Some(WhitelistShape::BracketedLiteral);
    }
    None
}

pub fn is_whitelisted(address: &str) -> bool {
    whitelist_shape(address).is_some()
}

// Les trois formes de partie locale exigent un domaine "host" après le
// dernier '@'.
fn hosted_local_shape(address: &str) -> Option<WhitelistShape> {
    let (local, domain) = split_borrowed(address)?;
    if !is_host_domain(domain) {
        return None;
    }
    if is_dot_atom_local(address, local) {
        Some(WhitelistShape::DotAtom)
    } else if is_quoted_local(local) {
        Some(WhitelistShape::QuotedLocal)
    } else if is_mixed_quoted_local(local) {
        Some(WhitelistShape::MixedQuotedLocal)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_in_rule_order() {
        let cases = [
            (" email@example.com", Some(WhitelistShape::LeadingWhitespace)),
            ("email@example.com", Some(WhitelistShape::DotAtom)),
            ("\"much.more unusual\"@example.com", Some(WhitelistShape::QuotedLocal)),
            ("abc.\"defghi\".xyz@example.com", Some(WhitelistShape::MixedQuotedLocal)),
            ("\"a\"@x_y", Some(WhitelistShape::QuotedFallback)),
            ("jsmith@[192.168.2.1]", Some(WhitelistShape::BracketedLiteral)),
            ("plainaddress", None),
        ];
        for (address, expected) in cases {
            assert_eq!(whitelist_shape(address), expected, "{address}");
        }
    }

    #[test]
    fn quirky_upstream_acceptances() {
        // dernier caractère libre: un second '@' passe
        assert!(is_whitelisted("a@@b.com"));
        assert!(is_whitelisted("a,@example.com"));
        assert!(is_whitelisted("\"a\"b\"c\"@example.com"));
    }

    #[test]
    fn rejects_broken_shapes() {
        for address in [
            "a@example.com",
            "x@y",
            "email@example..com",
            ".email@example.com",
            "email@-example.com",
            "email@example-.com",
            "email@example.com (Joe)",
            "email@example@example.com",
            "much.\"more\\ unusual\"@example.com",
            "ab@[1.2.3]",
            "abc@",
        ] {
            assert!(!is_whitelisted(address), "{address}");
        }
    }
}
