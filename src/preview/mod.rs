//! Debounced live preview
//!
//! While the user types, the direct mode indicator is recomputed after a
//! short quiet period. Each new input cancels the pending computation, so only
//! the latest text produces an update. Submission never goes through here.

use crate::engines::ShortcutTable;
use crate::query::{preview_mode, DirectModeIndicator};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default quiet period before the preview is recomputed
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Runs the latest scheduled task after a delay, cancelling earlier ones.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `task`, superseding any task still waiting
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        }));
    }

    /// Drop the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a scheduled task has not yet finished
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Indicator computed for one input snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewUpdate {
    pub input: String,
    pub indicator: Option<DirectModeIndicator>,
}

/// Debounced direct mode indicator feeding a channel
pub struct LivePreview {
    debouncer: Debouncer,
    shortcuts: Arc<ShortcutTable>,
    updates: mpsc::UnboundedSender<PreviewUpdate>,
}

impl LivePreview {
    /// Create a preview and the receiver its updates are delivered to
    pub fn new(
        shortcuts: Arc<ShortcutTable>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<PreviewUpdate>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let preview = Self {
            debouncer: Debouncer::new(delay),
            shortcuts,
            updates,
        };
        (preview, rx)
    }

    /// Report a change of the input text
    pub fn input_changed(&mut self, input: &str) {
        let input = input.to_string();
        let shortcuts = self.shortcuts.clone();
        let updates = self.updates.clone();

        self.debouncer.schedule(move || {
            let indicator = preview_mode(&input, &shortcuts);
            debug!("Preview for {:?}: {:?}", input, indicator);
            // The receiver may be gone when the UI shut down first
            let _ = updates.send(PreviewUpdate { input, indicator });
        });
    }

    /// Drop any pending update, e.g. when the input is submitted
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_task_runs() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        for value in ["g", "gh", "gh r"] {
            let calls = calls.clone();
            debouncer.schedule(move || calls.lock().unwrap().push(value));
            tokio::time::sleep(Duration::from_millis(30)).await;
        }
        assert!(calls.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["gh r"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let calls = Arc::new(Mutex::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(50));

        let counter = calls.clone();
        debouncer.schedule(move || *counter.lock().unwrap() += 1);
        assert!(debouncer.is_pending());
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_preview_reports_latest_input() {
        let shortcuts = Arc::new(ShortcutTable::builtin());
        let (mut preview, mut rx) = LivePreview::new(shortcuts, Duration::from_millis(100));

        preview.input_changed("g");
        preview.input_changed("gh");
        preview.input_changed("gh rust");

        let update = rx.recv().await.unwrap();
        assert_eq!(update.input, "gh rust");
        assert_eq!(
            update.indicator,
            Some(DirectModeIndicator::Shortcut {
                display_name: "GitHub"
            })
        );

        preview.input_changed("example.com");
        let update = rx.recv().await.unwrap();
        assert_eq!(update.indicator, Some(DirectModeIndicator::Url));
        assert!(rx.try_recv().is_err());
    }
}
