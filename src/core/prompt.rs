use std::io;

use crate::common::{HashGenError, Secret};

/// Reads one line from the controlling terminal with echo disabled.
///
/// `rpassword` scopes the non-echo terminal mode and restores echo before
/// returning on every exit path. If no terminal is available the error
/// surfaces here; falling back to an echoing read would display the
/// password, so there is no fallback.
pub fn read_secret(prompt: &str) -> Result<Secret, HashGenError> {
    rpassword::prompt_password(prompt)
        .map(Secret::new)
        .map_err(classify)
}

// EOF without a newline means the stream closed under us; everything else
// is a terminal problem. An empty line followed by Enter is not an error,
// it is an empty password.
fn classify(err: io::Error) -> HashGenError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        HashGenError::InputClosed
    } else {
        HashGenError::Terminal(err)
    }
}
