use std::sync::{Arc, Mutex};
use whoreacted::resolver::ProgressReporter;

#[derive(Default)]
pub struct RecordingProgress {
    pub events: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<(usize, usize)> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgress {
    fn on_resolved(&self, completed: usize, total: usize) {
        self.events.lock().unwrap().push((completed, total));
    }
}
