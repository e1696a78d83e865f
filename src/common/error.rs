use thiserror::Error;

/// Everything here is fatal: errors propagate straight to `main`, which
/// prints them to stderr and exits non-zero. No variant ever carries the
/// password itself.
#[derive(Debug, Error)]
pub enum HashGenError {
    #[error("cannot prompt on the terminal: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("input closed before a password was entered")]
    InputClosed,

    #[error("cost factor {0} is outside the supported range 4..=31")]
    InvalidCost(u32),

    #[error("password contains an interior NUL byte and cannot be hashed")]
    UnencodablePassword,

    #[error("invalid configuration: {0}")]
    Config(#[from] envy::Error),

    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
