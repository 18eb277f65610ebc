//! Command-line front end: `stats`, `dump` and `formats`

pub mod commands;

pub use commands::{Cli, Commands, ExtractArgs, run};
