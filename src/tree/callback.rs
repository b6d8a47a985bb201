//! Scan progress and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Progress sink and cancellation check for a running scan.
///
/// The builder polls [`ScanCallback::is_cancelled`] once per folder, before
/// listing it, and never per file.
pub trait ScanCallback {
    fn is_cancelled(&self) -> bool;

    /// Fire-and-forget progress message.
    fn update(&mut self, message: &str);
}

/// Shared cancellation switch; clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl ScanCallback for CancelFlag {
    fn is_cancelled(&self) -> bool {
        CancelFlag::is_cancelled(self)
    }

    fn update(&mut self, _message: &str) {}
}

/// Callback that records progress and emits it as trace events.
#[derive(Debug, Default)]
pub struct ScanProgress {
    cancel: CancelFlag,
    folders_read: usize,
    last_message: Option<String>,
}

impl ScanProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel_flag(cancel: CancelFlag) -> Self {
        Self {
            cancel,
            ..Self::default()
        }
    }

    /// Handle that cancels this scan when tripped.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Number of progress messages received, one per folder read.
    pub fn folders_read(&self) -> usize {
        self.folders_read
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }
}

impl ScanCallback for ScanProgress {
    fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn update(&mut self, message: &str) {
        self.folders_read += 1;
        debug!(folders_read = self.folders_read, "{}", message);
        self.last_message = Some(message.to_string());
    }
}
