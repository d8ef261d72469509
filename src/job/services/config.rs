//! Configuration for job processing.

/// Tunables for [`super::JobProcessingService`].
///
/// # Examples
///
/// ```
/// use insightboard::job::services::ProcessingConfig;
///
/// let config = ProcessingConfig::default();
/// assert_eq!(config.recent_job_limit, 20);
///
/// let strict = ProcessingConfig::strict();
/// assert!(strict.max_transcript_bytes < config.max_transcript_bytes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingConfig {
    /// Maximum accepted transcript size in bytes.
    pub max_transcript_bytes: usize,
    /// Number of jobs returned by recent-job listings.
    pub recent_job_limit: usize,
    /// Attempts made to persist a task completion before a version conflict
    /// is reported to the caller.
    pub max_update_attempts: u32,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_transcript_bytes: 1024 * 1024, // 1 MiB
            recent_job_limit: 20,
            max_update_attempts: 3,
        }
    }
}

impl ProcessingConfig {
    /// Creates a configuration with generous limits.
    ///
    /// Useful for batch imports of long transcripts.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_transcript_bytes: 8 * 1024 * 1024, // 8 MiB
            max_update_attempts: 5,
            ..Default::default()
        }
    }

    /// Creates a configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_transcript_bytes: 64 * 1024, // 64 KiB
            recent_job_limit: 10,
            max_update_attempts: 1,
        }
    }
}
