//! CLI subcommand implementations for typecoerce

pub mod convert;
pub mod input;
pub mod inspect;
pub mod output;
