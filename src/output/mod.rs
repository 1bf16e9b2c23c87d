// src/output/mod.rs
//! Response bodies the service delivers to its clients.

mod types;

pub use types::{FailureBody, ResultEnvelope};
