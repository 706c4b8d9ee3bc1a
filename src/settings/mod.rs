//! Settings Module
//!
//! Loads the JSON configuration file once at startup, applies CLI
//! overrides, and validates the result before anything touches the
//! network. Configuration is immutable for the lifetime of the
//! process.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
