//! innkeep CLI library
//!
//! Subcommands and config resolution for the `innkeep` binary.

pub mod commands;
