use super::chars::utf16_len;
use super::types::{AddressError, AddressParts, LengthViolation};

// Limites pratiques (code units UTF-16), bornes atteintes = trop long.
pub const MAX_DOMAIN_LEN: usize = 253;
pub const MAX_LOCAL_LEN: usize = 64;
pub const MAX_TOTAL_LEN: usize = 254;

/// Split `address` at its last `@`.
///
/// Everything after the last `@` is the domain (possibly empty), everything
/// before it the local part. No other validation happens here.
pub fn split_parts(address: &str) -> Result<AddressParts, AddressError> {
    let (local, domain) = split_borrowed(address).ok_or_else(|| AddressError::malformed(address))?;
    Ok(AddressParts {
        local: local.to_string(),
        domain: domain.to_string(),
    })
}

pub(crate) fn split_borrowed(address: &str) -> Option<(&str, &str)> {
    address.rsplit_once('@')
}

/// First length gate the address trips, checked domain, local, then total.
///
/// Without an `@` the whole address counts as the domain, so the domain
/// gate (253) fires before the total one (254).
pub fn length_violation(address: &str) -> Option<LengthViolation> {
    let (local, domain) = split_borrowed(address).unwrap_or(("", address));
    let domain_len = utf16_len(domain);
    if domain_len >= MAX_DOMAIN_LEN {
        return Some(LengthViolation::Domain(domain_len));
    }
    let local_len = utf16_len(local);
    if local_len >= MAX_LOCAL_LEN {
        return Some(LengthViolation::Local(local_len));
    }
    let total = utf16_len(address);
    if total >= MAX_TOTAL_LEN {
        return Some(LengthViolation::Total(total));
    }
    None
}

pub fn is_too_long(address: &str) -> bool {
    length_violation(address).is_some()
}
