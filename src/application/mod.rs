//! Application layer: the expiration rule and the batch sweep built on top of it.
//!
//! [`policy::ExpiredPaymentPolicy`] is the single decision point; [`sweep`] runs it
//! over many payments at once and collects the verdicts.

pub mod policy;
pub mod sweep;
