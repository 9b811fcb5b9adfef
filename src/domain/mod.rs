//! Domain types and ports.
//!
//! Nothing in here performs I/O: the clock is reached through the [`ports::Clock`]
//! trait so the expiration rule stays deterministic under test.

pub mod config;
pub mod ports;
pub mod transaction;
pub mod zone;
