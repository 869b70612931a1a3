mod blacklist;
mod chars;
mod comments;
mod domain;
mod local;
mod parts;
mod types;
mod whitelist;

pub use types::{
    AddressError, AddressParts, BlacklistRule, Classification, LengthViolation, ValidationMode,
    ValidationReport, WhitelistShape,
};

pub use blacklist::{blacklist_rule, is_blacklisted};
pub use comments::has_valid_comment_form;
pub use parts::{
    MAX_DOMAIN_LEN, MAX_LOCAL_LEN, MAX_TOTAL_LEN, is_too_long, length_violation, split_parts,
};
pub use whitelist::{is_whitelisted, whitelist_shape};

/// Checks whether an email address is valid.
///
/// ```
/// assert!(mailshape_lib::is_valid("email@example.com"));
/// assert!(mailshape_lib::is_valid("john.smith(comment)@example.com"));
/// assert!(!mailshape_lib::is_valid("@example.com"));
/// ```
pub fn is_valid(address: &str) -> bool {
    is_valid_with_mode(address, ValidationMode::Standard)
}

pub fn is_valid_with_mode(address: &str, mode: ValidationMode) -> bool {
    if is_blacklisted(address) {
        return false;
    }
    match mode {
        // la limite de longueur passe avant les motifs de la whitelist
        ValidationMode::Standard => {
            (!is_too_long(address) && is_whitelisted(address)) || has_valid_comment_form(address)
        }
        ValidationMode::Legacy => is_whitelisted(address),
    }
}

/// Runs all four predicates, without short-circuiting.
pub fn classify(address: &str) -> Classification {
    let checks = Classification {
        shape: whitelist_shape(address),
        blacklist: blacklist_rule(address),
        length: length_violation(address),
        comment_form: has_valid_comment_form(address),
    };
    #[cfg(feature = "with-tracing")]
    tracing::trace!(
        address,
        shape = ?checks.shape,
        blacklist = ?checks.blacklist,
        length = ?checks.length,
        comment_form = checks.comment_form,
        "address classified"
    );
    checks
}

/// Classifies `address` and explains the verdict.
///
/// `reasons` is empty when the address is accepted.
pub fn validate_email(address: &str, mode: ValidationMode) -> ValidationReport {
    let checks = classify(address);
    let ok = checks.verdict(mode);
    let parts = split_parts(address).ok();

    let mut reasons = Vec::new();
    if !ok {
        if let Some(rule) = checks.blacklist {
            reasons.push(format!("blacklisted ({rule}): {}", rule.describe()));
        }
        if parts.is_none() {
            reasons.push("missing '@' separator".to_string());
        }
        match mode {
            ValidationMode::Standard => {
                if let Some(violation) = checks.length {
                    reasons.push(violation.to_string());
                }
                if checks.shape.is_none() && !checks.comment_form {
                    reasons.push("no supported address shape or comment form".to_string());
                }
            }
            ValidationMode::Legacy => {
                if checks.shape.is_none() {
                    reasons.push("no supported address shape".to_string());
                }
            }
        }
    }

    #[cfg(feature = "with-tracing")]
    tracing::debug!(address, mode = mode.as_str(), ok, "address validated");

    ValidationReport {
        address: address.to_string(),
        mode,
        ok,
        parts,
        checks,
        reasons,
    }
}
