// src/progress.rs
/// Lightweight progress reporting for the long-running scrape stages.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a stage with the number of items in it.
    fn begin(&mut self, _stage: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item (season or contestant) finished, fetched or from cache.
    fn item_done(&mut self, _id: u32, _label: &str) {}

    /// One item degraded to an error placeholder.
    fn item_failed(&mut self, _id: u32, _label: &str) {}

    /// Called at the end of a stage.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Counts items and reports through the log.
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    stage: String,
    total: usize,
    done: usize,
    failed: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self) -> usize {
        self.done + self.failed
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, stage: &str, total: usize) {
        self.stage = s!(stage);
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, _id: u32, label: &str) {
        self.done += 1;
        logd!("[{}/{}] {label}", self.position(), self.total);
    }

    fn item_failed(&mut self, id: u32, label: &str) {
        self.failed += 1;
        logw!("[{}/{}] {label} (id={id}) failed", self.position(), self.total);
    }

    fn finish(&mut self) {
        logf!("{}: {} ok, {} failed of {}", self.stage, self.done, self.failed, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_progress_counts() {
        let mut p = ConsoleProgress::new();
        p.begin("contestants", 3);
        p.item_done(1, "A");
        p.item_failed(2, "B");
        p.item_done(3, "C");
        assert_eq!((p.done, p.failed, p.position()), (2, 1, 3));

        p.begin("seasons", 1);
        assert_eq!(p.position(), 0);
    }
}
