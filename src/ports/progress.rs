//! Acquisition progress observation port.

/// Observer for page-by-page acquisition progress.
///
/// Cosmetic only; no correctness depends on these callbacks.
pub trait ProgressListener {
    /// Acquisition started with a known record target.
    fn begin(&self, target: u64);

    /// `fetched` records retrieved so far out of `target`.
    fn advance(&self, fetched: u64, target: u64);

    /// Acquisition finished.
    fn finish(&self);
}

/// Listener that ignores all progress events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressListener for NoopProgress {
    fn begin(&self, _target: u64) {}
    fn advance(&self, _fetched: u64, _target: u64) {}
    fn finish(&self) {}
}
