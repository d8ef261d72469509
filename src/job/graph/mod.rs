//! Dependency graph engine for extracted task lists.
//!
//! Every function here is a pure transformation over a borrowed task slice:
//!
//! 1. [`sanitize`] drops dependency references to unknown tasks and reports
//!    each removal as a [`DanglingDependency`].
//! 2. [`detect_cycles`] walks the sanitized graph and reports every cycle.
//! 3. [`classify`] assigns initial statuses from the cycle report, and
//!    [`complete`] marks one task completed and promotes its dependents.
//!
//! None of these functions share state, so concurrent callers only need to
//! own their task lists.

mod cycles;
mod propagate;
mod sanitize;

pub use cycles::detect_cycles;
pub use propagate::{CYCLE_ERROR_MESSAGE, PropagationError, classify, complete};
pub use sanitize::{DanglingDependency, Sanitized, ensure_unique_ids, sanitize};
