use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr.
///
/// Progress goes to stderr so stdout stays reserved for the digest itself
/// and remains pipeable.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn report_completion(&self, message: &str) {
        eprintln!("✅ {}", message);
    }
}
