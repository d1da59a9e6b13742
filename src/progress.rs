// src/progress.rs
/// Lightweight progress reporting for multi-round fetches.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of rounds.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One round fetched and parsed.
    fn item_done(&mut self, _round: u32) {}

    /// One round failed; `reason` is the user-facing message.
    fn item_failed(&mut self, _round: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
