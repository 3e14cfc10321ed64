//! Volunteer help-request lifecycle.
//!
//! Tasks open with a requester's details, are claimed by one volunteer, and
//! are then completed. The module follows hexagonal architecture:
//!
//! - Domain types and the board state machine in [`domain`]
//! - The snapshot persistence contract in [`ports`]
//! - In-memory and JSON file adapters in [`adapters`]
//! - The task store and validated lifecycle service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
