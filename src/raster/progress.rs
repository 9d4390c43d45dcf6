//! Progress reporting for the conversion loop.
use linya::{Bar, Progress};

/// Progress bar covering one directory's conversion jobs.
pub struct ConversionProgress {
    progress: Progress,
    bar: Bar,
}

impl ConversionProgress {
    /// Create a bar sized to the number of planned jobs.
    pub fn new(total: usize, label: impl Into<String>) -> Self {
        let mut progress = Progress::new();
        let bar = progress.bar(total, label.into());
        Self { progress, bar }
    }

    /// Record one completed conversion.
    pub fn inc(&mut self) {
        self.progress.inc_and_draw(&self.bar, 1);
    }
}
