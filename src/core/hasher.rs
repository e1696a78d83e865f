use crate::common::{HashGenError, Secret};

/// Work-factor bounds accepted by the bcrypt primitive. The cost is
/// exponential in actual work: 2^cost rounds of key setup.
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// Work factor used when `HASH_COST` is not set.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Derives a salted bcrypt hash in the standard `$2b$<cost>$<salt><digest>`
/// encoding.
///
/// The 16-byte salt comes from the OS entropy source on every call, so
/// hashing the same password twice yields different strings. The returned
/// string embeds version, cost and salt, so it verifies later without any
/// separately stored material.
pub fn hash_secret(secret: &Secret, cost: u32) -> Result<String, HashGenError> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(HashGenError::InvalidCost(cost));
    }
    // bcrypt's key schedule is NUL-terminated; an interior NUL would
    // silently truncate the password
    if secret.as_bytes().contains(&0) {
        return Err(HashGenError::UnencodablePassword);
    }

    tracing::debug!(cost, "deriving bcrypt hash");
    Ok(bcrypt::hash(secret.as_bytes(), cost)?)
}
