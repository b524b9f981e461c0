//! Command-line interface support for the `fnet` binary.

pub mod commands;
