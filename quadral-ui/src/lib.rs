//! quadral-ui library - Quadral matchmaking client module
//!
//! Resolves the logged-in user's quadra from their TIM, searches for
//! joinable clusters, attempts to claim a slot, and drives the
//! find-or-create negotiation against the matchmaking service.

pub mod cli;
pub mod client;
pub mod identity;
pub mod matchmaking;
pub mod render;
