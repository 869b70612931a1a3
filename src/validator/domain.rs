use once_cell::sync::Lazy;
use regex::Regex;

use super::chars::{NON_ASCII, ON_LINE, first_line};

static HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?:[a-zA-Z0-9.\-]|{NON_ASCII})+$")).expect("valid host regex")
});

// Trois groupes `\w+` fermés par '.' ou ':' puis le reste du littéral.
static BRACKETED_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"{ON_LINE}+@\[(?:[0-9A-Za-z_]+[.:]){{3}}{ON_LINE}+\]"
    ))
    .expect("valid bracketed literal regex")
});

/// Valide le domaine d'une adresse non littérale: lettres, chiffres, '-',
/// '.', ou non-ASCII (pas de conversion IDNA). Pas de '-' initial, pas de
/// "-." (avant une éventuelle fin de ligne).
pub(crate) fn is_host_domain(domain: &str) -> bool {
    HOST.is_match(domain) && !domain.starts_with('-') && !first_line(domain).contains("-.")
}

/// `[192.168.2.1]` or `[IPv6:2001:db8::1]` domain somewhere after a
/// non-empty prefix.
pub(crate) fn has_bracketed_literal(address: &str) -> bool {
    BRACKETED_LITERAL.is_match(address)
}
