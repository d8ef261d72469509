//! Transcript jobs and their task dependency graphs.
//!
//! A job wraps one submitted transcript, the tasks extracted from it, and the
//! cycle report computed over their dependencies. Completing a task later
//! re-enters the graph engine so dependents become ready as their
//! prerequisites finish. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Dependency graph engine in [`graph`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod graph;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
