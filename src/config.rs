use serde::Deserialize;

use crate::common::HashGenError;
use crate::core::hasher;

/// Runtime configuration, read from the process environment (plus `.env`
/// when one is present).
///
/// `HASH_COST` overrides the bcrypt work factor. Absent, the tool uses 12,
/// the same work factor it has always used. Out-of-range values parse here
/// and are rejected by the hasher.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

fn default_hash_cost() -> u32 {
    hasher::DEFAULT_COST
}

impl Config {
    pub fn from_env() -> Result<Self, HashGenError> {
        Ok(envy::from_env::<Config>()?)
    }
}
