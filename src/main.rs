use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use hash_gen::Config;
use hash_gen::core::{hasher, print_banner, print_hash, read_secret};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // log lines go to stderr so stdout carries nothing but the banner,
    // the label and the hash
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("LOG_LEVEL"))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;

    let mut out = io::stdout().lock();
    print_banner(&mut out)?;

    let secret = read_secret("Enter the password: ")?;
    let hash = hasher::hash_secret(&secret, config.hash_cost)?;

    print_hash(&mut out, &hash)?;
    Ok(())
}
