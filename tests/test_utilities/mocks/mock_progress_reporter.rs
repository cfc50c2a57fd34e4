use release_digest::prelude::ProgressReporter;
use std::sync::Mutex;

/// Progress reporter that records messages instead of printing them.
#[derive(Default)]
pub struct MockProgressReporter {
    messages: Mutex<Vec<String>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("done: {}", message));
    }
}
