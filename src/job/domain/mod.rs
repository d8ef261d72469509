//! Domain model for transcript jobs and extracted tasks.
//!
//! Tasks are identified by opaque keys chosen at extraction time; jobs own a
//! task list together with the cycle report derived from it. Infrastructure
//! concerns stay outside of the domain boundary.

mod cycle;
mod error;
mod extracted;
mod ids;
mod job;
mod task;

pub use cycle::{Cycle, CycleReport};
pub use error::{JobDomainError, ParseJobStatusError, ParseTaskPriorityError, ParseTaskStatusError};
pub use extracted::ExtractedTask;
pub use ids::{JobId, TaskKey, TranscriptHash};
pub use job::{Job, JobStatus};
pub use task::{PersistedTaskData, Task, TaskPriority, TaskStatus};
