//! Helpboard: coordinating community help requests between requesters and
//! volunteers.
//!
//! Requesters open tasks, a volunteer claims one, and a claimed task is later
//! marked completed. All state lives in a single task store that persists a
//! JSON snapshot after every change.
//!
//! # Architecture
//!
//! Helpboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (filesystem, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, store, and persistence
//! - [`http`]: JSON API over the lifecycle service
//! - [`config`]: Server configuration from flags and environment
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
