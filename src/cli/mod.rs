//! Command-line surface: config path, detector and interval
//! overrides, and a `version` subcommand.

pub mod impls;
pub mod types;
