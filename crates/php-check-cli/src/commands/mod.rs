//! CLI subcommand implementations.

pub mod check;
