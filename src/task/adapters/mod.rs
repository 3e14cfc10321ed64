//! Adapter implementations for task board persistence.

pub mod file;
pub mod memory;
