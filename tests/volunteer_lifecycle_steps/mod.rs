//! Step definitions for volunteer lifecycle scenarios.

mod given;
mod then;
mod when;
pub mod world;
