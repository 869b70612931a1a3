use once_cell::sync::Lazy;
use regex::Regex;

use super::chars::{ATEXT, MIXED_QTEXT, NON_ASCII, QTEXT, first_line};

// Le dernier caractère avant '@' peut être n'importe quoi sauf '.' ou '"'.
// Une partie locale d'un seul caractère n'est acceptée que s'il occupe deux
// code units (plan astral).
static DOT_ATOM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"^(?:(?:[{ATEXT}]|{NON_ASCII})+[^."]|(?:[{ATEXT}]|{NON_ASCII})*[\x{{10000}}-\x{{10FFFF}}])$"#
    ))
    .expect("valid dot-atom regex")
});

static QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r#"^"(?:[{QTEXT}]|{NON_ASCII})+"$"#)).expect("valid quoted local regex")
});

static MIXED_QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"^(?:[{ATEXT}]|{NON_ASCII})+\."(?:[{MIXED_QTEXT}]|{NON_ASCII})+"\.(?:[{ATEXT}]|{NON_ASCII})+$"#
    ))
    .expect("valid mixed quoted local regex")
});

/// Unquoted local part: no leading dot, and no `..` anywhere in the address
/// past its first character.
pub(crate) fn is_dot_atom_local(address: &str, local: &str) -> bool {
    !local.starts_with('.') && !has_inner_double_dot(address) && DOT_ATOM.is_match(local)
}

/// `"..."` local part.
pub(crate) fn is_quoted_local(local: &str) -> bool {
    QUOTED.is_match(local)
}

/// `abc."def".xyz` local part.
pub(crate) fn is_mixed_quoted_local(local: &str) -> bool {
    MIXED_QUOTED.is_match(local)
}

fn has_inner_double_dot(address: &str) -> bool {
    let line = first_line(address);
    let mut chars = line.chars();
    match chars.next() {
        Some(_) => chars.as_str().contains(".."),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot_atom(local: &str) -> bool {
        is_dot_atom_local(&format!("{local}@example.com"), local)
    }

    #[test]
    fn dot_atom_basics() {
        assert!(dot_atom("email"));
        assert!(dot_atom("firstname.lastname"));
        assert!(dot_atom("#!$%&'*+-/=?^_`{}|~"));
        assert!(dot_atom("üñîçøðé"));
        assert!(!dot_atom(".email"));
        assert!(!dot_atom("email."));
        assert!(!dot_atom("email..x"));
    }

    #[test]
    fn dot_atom_needs_two_code_units() {
        assert!(!dot_atom("a"));
        assert!(dot_atom("ab"));
        assert!(dot_atom("😀"));
    }

    #[test]
    fn dot_atom_last_char_is_loose() {
        assert!(dot_atom("a,"));
        assert!(!dot_atom("ab\""));
    }

    #[test]
    fn double_dot_in_domain_also_rejects() {
        assert!(!is_dot_atom_local("email@example..com", "email"));
        // a leading ".." is left to the leading-dot check
        assert!(!has_inner_double_dot("..x"));
        assert!(has_inner_double_dot("x..y"));
        assert!(!has_inner_double_dot("x\n..y"));
    }

    #[test]
    fn quoted_local() {
        assert!(is_quoted_local("\"much.more unusual\""));
        assert!(is_quoted_local("\"very.unusual.@.unusual.com\""));
        assert!(is_quoted_local("\" \""));
        assert!(!is_quoted_local("\"\""));
        assert!(!is_quoted_local("\"a\\b\""));
        assert!(!is_quoted_local("\"x\"y"));
    }

    #[test]
    fn mixed_quoted_local() {
        assert!(is_mixed_quoted_local("abc.\"defghi\".xyz"));
        assert!(is_mixed_quoted_local("abc.\"d\\\\efghi\".xyz"));
        assert!(is_mixed_quoted_local("very.unusual.\"@\".unusual.com"));
        assert!(!is_mixed_quoted_local("much.\"more\\ unusual\""));
        assert!(!is_mixed_quoted_local("abc.\"\".xyz"));
    }
}
