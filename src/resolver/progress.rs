/// Consumer of per-user progress signals
///
/// Called once after each user is resolved, in resolution order.
pub trait ProgressReporter: Send + Sync {
    /// `completed` out of `total` users have been resolved
    fn on_resolved(&self, completed: usize, total: usize);
}

/// Progress reporter that discards every signal
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_resolved(&self, _completed: usize, _total: usize) {}
}
