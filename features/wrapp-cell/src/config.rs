use std::time::Duration;

/// Settings used while applying cells to a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyConfig {
    /// Registrations taking longer than this are logged at info level
    pub log_threshold: Duration,
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self {
            log_threshold: Duration::from_millis(100),
        }
    }
}

impl ApplyConfig {
    pub fn with_log_threshold(mut self, log_threshold: Duration) -> Self {
        self.log_threshold = log_threshold;
        self
    }
}
