use std::io::Write;

use crate::common::HashGenError;

pub const BANNER: &str = "=== Bcrypt Hash Generator ===";
const HASH_LABEL: &str = "Generated hash (save this value in the database):";

pub fn print_banner(out: &mut impl Write) -> Result<(), HashGenError> {
    writeln!(out, "{BANNER}")?;
    out.flush()?;
    Ok(())
}

/// Writes the label and the encoded hash. A run that cannot deliver its
/// hash has nothing to fall back to, so write failures are fatal to the
/// caller.
pub fn print_hash(out: &mut impl Write, hash: &str) -> Result<(), HashGenError> {
    writeln!(out)?;
    writeln!(out, "{HASH_LABEL}")?;
    writeln!(out, "{hash}")?;
    out.flush()?;
    Ok(())
}
