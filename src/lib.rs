//! InsightBoard: dependency-aware task boards from meeting transcripts.
//!
//! A transcript is turned into a list of tasks with dependencies by an
//! extraction collaborator. This crate validates that dependency graph,
//! reports circular dependencies, derives each task's status from the graph,
//! and propagates completions to dependent tasks.
//!
//! # Architecture
//!
//! InsightBoard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, extraction)
//!
//! # Modules
//!
//! - [`job`]: Transcript jobs, the task graph engine, and job processing

pub mod job;
