//! Progress reporting for transcript rendering.
//!
//! Rendering pushes [`Progress`] snapshots through a [`ProgressCallback`].
//! [`ProgressTicker`] decides when a snapshot is worth reporting so that a
//! run prints roughly 10 to 100 updates no matter how many messages it has.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use tgtranscript::progress::{ProgressCallback, ProgressTicker};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let callback: ProgressCallback = Arc::new(move |progress| {
//!     sink.lock().unwrap().push(progress.percentage());
//! });
//!
//! let mut ticker = ProgressTicker::new(4);
//! for _ in 0..4 {
//!     ticker.tick(&callback);
//! }
//! assert_eq!(*seen.lock().unwrap(), vec![25, 50, 75, 100]);
//! ```

use std::io::Write;
use std::sync::Arc;

/// Snapshot of how far rendering has come.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of messages visited so far.
    pub items_processed: usize,

    /// Total number of messages in the export.
    pub total_items: usize,
}

impl Progress {
    /// Creates a new progress instance.
    pub fn new(items_processed: usize, total_items: usize) -> Self {
        Self {
            items_processed,
            total_items,
        }
    }

    /// Returns the whole-number percentage (0 - 100).
    ///
    /// An empty export counts as complete.
    ///
    /// ```rust
    /// use tgtranscript::progress::Progress;
    ///
    /// assert_eq!(Progress::new(1, 3).percentage(), 33);
    /// assert_eq!(Progress::new(0, 0).percentage(), 100);
    /// ```
    pub fn percentage(&self) -> usize {
        if self.total_items == 0 {
            100
        } else {
            self.items_processed * 100 / self.total_items
        }
    }

    /// Returns whether every message has been visited.
    pub fn is_complete(&self) -> bool {
        self.items_processed >= self.total_items
    }
}

/// Callback type for receiving progress updates.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Creates a no-op progress callback.
///
/// ```rust
/// use tgtranscript::progress::{Progress, no_progress};
///
/// let callback = no_progress();
/// callback(Progress::default()); // Does nothing
/// ```
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_| {})
}

/// Creates a progress callback that redraws `Progress: N%` on stderr.
///
/// The line is rewritten in place with `\r`; a newline follows the final
/// update.
pub fn stderr_progress() -> ProgressCallback {
    Arc::new(|progress| {
        let mut stderr = std::io::stderr().lock();
        // Progress is cosmetic; a closed stderr must not abort the run.
        let _ = write!(stderr, "\rProgress: {}%", progress.percentage());
        if progress.is_complete() {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    })
}

/// Counts visited messages and reports only the ticks worth showing.
///
/// A tick is reported when it is the first or the last one, and otherwise
/// every `total / 100` messages for large exports or every
/// `max(1, total / 10)` messages for exports of at most 100 messages.
#[derive(Debug, Clone)]
pub struct ProgressTicker {
    count: usize,
    total: usize,
}

impl ProgressTicker {
    /// Creates a ticker for an export with `total` messages.
    pub fn new(total: usize) -> Self {
        Self { count: 0, total }
    }

    /// Records one visited message, invoking `callback` when due.
    pub fn tick(&mut self, callback: &ProgressCallback) {
        self.count += 1;
        if self.is_due() {
            callback(Progress::new(self.count, self.total));
        }
    }

    /// Reports a final snapshot if no tick ever did.
    ///
    /// An empty export never ticks; this still hands the callback one
    /// complete snapshot so a progress line gets terminated.
    pub fn finish(&self, callback: &ProgressCallback) {
        if self.count == 0 {
            callback(Progress::new(0, self.total));
        }
    }

    fn is_due(&self) -> bool {
        let step = if self.total > 100 {
            self.total / 100
        } else {
            (self.total / 10).max(1)
        };
        self.count == 1 || self.count == self.total || self.count % step == 0
    }
}
