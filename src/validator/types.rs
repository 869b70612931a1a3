use std::fmt;

use thiserror::Error;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// `(whitelist && !blacklist && !too_long) || (!blacklist && comment)`
    #[default]
    Standard,
    /// Première version du validateur: `whitelist && !blacklist`, sans
    /// limites de longueur ni commentaires.
    Legacy,
}

impl ValidationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationMode::Standard => "standard",
            ValidationMode::Legacy => "legacy",
        }
    }
}

/// Local part and domain of an address, split at the last `@`.
///
/// `format!("{}@{}", parts.local, parts.domain)` always gives back the
/// original address.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParts {
    pub local: String,
    pub domain: String,
}

/// Structural shape that got an address whitelisted.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitelistShape {
    /// Address begins with whitespace. Almost certainly unintended upstream;
    /// the blacklist rejects every such address anyway.
    LeadingWhitespace,
    DotAtom,
    QuotedLocal,
    MixedQuotedLocal,
    QuotedFallback,
    BracketedLiteral,
}

impl WhitelistShape {
    pub fn as_str(self) -> &'static str {
        match self {
            WhitelistShape::LeadingWhitespace => "leading-whitespace",
            WhitelistShape::DotAtom => "dot-atom",
            WhitelistShape::QuotedLocal => "quoted-local",
            WhitelistShape::MixedQuotedLocal => "mixed-quoted-local",
            WhitelistShape::QuotedFallback => "quoted-fallback",
            WhitelistShape::BracketedLiteral => "bracketed-literal",
        }
    }
}

impl fmt::Display for WhitelistShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlacklistRule {
    LeadingAt,
    LeadingWhitespace,
    NumericRun,
    UnescapedQuotePair,
}

impl BlacklistRule {
    pub fn as_str(self) -> &'static str {
        match self {
            BlacklistRule::LeadingAt => "leading-at",
            BlacklistRule::LeadingWhitespace => "leading-whitespace",
            BlacklistRule::NumericRun => "numeric-run",
            BlacklistRule::UnescapedQuotePair => "unescaped-quote-pair",
        }
    }

    pub(crate) fn describe(self) -> &'static str {
        match self {
            BlacklistRule::LeadingAt => "local part is empty",
            BlacklistRule::LeadingWhitespace => "address starts with whitespace",
            BlacklistRule::NumericRun => "run of 4+ digits after '@'",
            BlacklistRule::UnescapedQuotePair => "unescaped quoted runs in sequence",
        }
    }
}

impl fmt::Display for BlacklistRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length gate that fired, with the measured length in UTF-16 code units.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthViolation {
    Domain(usize),
    Local(usize),
    Total(usize),
}

impl fmt::Display for LengthViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use super::parts::{MAX_DOMAIN_LEN, MAX_LOCAL_LEN, MAX_TOTAL_LEN};
        match self {
            LengthViolation::Domain(len) => write!(f, "domain length {len} >= {MAX_DOMAIN_LEN}"),
            LengthViolation::Local(len) => write!(f, "local part length {len} >= {MAX_LOCAL_LEN}"),
            LengthViolation::Total(len) => write!(f, "total length {len} >= {MAX_TOTAL_LEN}"),
        }
    }
}

/// Outcome of the four decision predicates for one address.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub shape: Option<WhitelistShape>,
    pub blacklist: Option<BlacklistRule>,
    pub length: Option<LengthViolation>,
    pub comment_form: bool,
}

impl Classification {
    pub fn whitelisted(&self) -> bool {
        self.shape.is_some()
    }

    pub fn blacklisted(&self) -> bool {
        self.blacklist.is_some()
    }

    pub fn too_long(&self) -> bool {
        self.length.is_some()
    }

    pub fn verdict(&self, mode: ValidationMode) -> bool {
        match mode {
            ValidationMode::Standard => {
                (self.whitelisted() && !self.blacklisted() && !self.too_long())
                    || (!self.blacklisted() && self.comment_form)
            }
            ValidationMode::Legacy => self.whitelisted() && !self.blacklisted(),
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub address: String,
    pub mode: ValidationMode,
    pub ok: bool,
    pub parts: Option<AddressParts>,
    pub checks: Classification,
    pub reasons: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("malformed address {address:?}: no '@' separator")]
    MalformedAddress { address: String },
}

impl AddressError {
    pub(crate) fn malformed(address: &str) -> Self {
        Self::MalformedAddress {
            address: address.to_string(),
        }
    }
}
