pub mod hasher;
mod prompt;
mod reporter;

pub use prompt::read_secret;
pub use reporter::{print_banner, print_hash};
