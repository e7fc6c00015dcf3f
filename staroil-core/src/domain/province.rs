//! Province name resolution
//!
//! Station records store the short province code ("MI"); end users query with
//! either the code or the full name ("Milano"), in any case and with stray
//! whitespace. Resolution is total: an unknown token passes through unchanged
//! so it can still participate in equality checks.

/// Known province codes and their canonical full names
const PROVINCES: [(&str, &str); 5] = [
    ("MI", "Milano"),
    ("TO", "Torino"),
    ("RM", "Roma"),
    ("NA", "Napoli"),
    ("BO", "Bologna"),
];

/// Resolve a province token (code or full name) to the canonical full name.
///
/// Matching is case-insensitive and ignores surrounding whitespace. A token
/// that is neither a known code nor a known full name is returned unchanged.
pub fn full_province_name(token: &str) -> String {
    let normalized = token.trim().to_uppercase();
    for (code, full) in PROVINCES {
        if code == normalized {
            return full.to_string();
        }
    }
    for (_, full) in PROVINCES {
        if full.to_uppercase() == normalized {
            return full.to_string();
        }
    }
    token.to_string()
}

/// Compare two province tokens by trimming and case-folding only.
///
/// No full-name resolution is applied; this is the exact storage-form
/// comparison used by the station matching paths.
pub fn same_province(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Whether a stored province value matches a user-supplied token.
///
/// A station matches if its stored province equals the token, or the resolved
/// full name of the token, or the token equals the resolved full name of the
/// stored value. Station records only carry the code, so a plain equality
/// filter would return nothing for anyone querying with the full name.
pub fn province_matches(stored: &str, token: &str) -> bool {
    same_province(stored, token)
        || same_province(&full_province_name(stored), token)
        || same_province(stored, &full_province_name(token))
}
