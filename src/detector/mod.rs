//! Address Detector Module
//!
//! Determines the caller's current public IPv4 address. Two
//! interchangeable strategies exist, selected once at startup:
//!
//! - `ipify`: query the api.ipify.org echo service over HTTPS and
//!   parse the JSON body.
//! - `ip-cmd`: shell out to `ip addr show <interface>` and extract the
//!   address token from the expected line of output.
//!
//! A detector may report "address unknown this cycle" (`Ok(None)`);
//! that result must never be written downstream.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;
