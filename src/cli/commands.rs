//! Subcommands of the `fixture-runner` binary.

pub mod list;
pub mod run;
