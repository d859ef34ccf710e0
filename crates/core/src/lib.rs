//! Shared types for the external-initiator job deployment tooling.
//!
//! Holds the environment/argument configuration and the job
//! specification document submitted to the Chainlink node. Nothing in
//! this crate performs I/O beyond reading the process environment.

pub mod config;
pub mod error;
pub mod job_spec;
