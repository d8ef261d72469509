//! Adapter implementations for job ports.

pub mod extraction;
pub mod memory;
