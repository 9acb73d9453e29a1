//! Shared API types for the matchmaking service contract

pub mod types;

pub use types::*;
