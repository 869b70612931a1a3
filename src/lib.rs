#![forbid(unsafe_code)]
//! mailshape_lib — classification syntaxique d'adresses e-mail.
//!
//! Approximates RFC 5322 with a small set of independent rules: known-good
//! shapes (whitelist), known-bad patterns (blacklist), practical length
//! limits, and parenthesized comments next to the local part. An address is
//! accepted when
//!
//! ```text
//! (whitelisted && !blacklisted && !too_long) || (!blacklisted && comment_form)
//! ```
//!
//! No DNS lookups, no normalization. Known unsupported (but RFC-valid)
//! addresses include deeply nested escaped quotes such as
//! `much."more\ unusual"@example.com`.

pub mod validator;
pub use validator::{
    AddressError,
    AddressParts,
    BlacklistRule,
    Classification,
    LengthViolation,
    MAX_DOMAIN_LEN,
    MAX_LOCAL_LEN,
    MAX_TOTAL_LEN,
    ValidationMode,
    ValidationReport,
    WhitelistShape,
    blacklist_rule,
    classify,
    has_valid_comment_form,
    is_blacklisted,
    is_too_long,
    is_valid,
    is_valid_with_mode,
    is_whitelisted,
    length_violation,
    split_parts,
    validate_email,
    whitelist_shape,
};
