use anyhow::Result;
use notify_debouncer_mini::notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

const DEBOUNCE: Duration = Duration::from_millis(300);

/// Watches the showcase file and reports debounced changes.
///
/// The debouncer runs on its own thread and sends into a channel the
/// frame loop drains; dropping the watcher stops it.
pub struct ShowcaseWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
    rx: mpsc::Receiver<DebounceEventResult>,
}

impl ShowcaseWatcher {
    pub fn new(path: &Path) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE, tx)?;
        debouncer.watcher().watch(path, RecursiveMode::NonRecursive)?;
        Ok(Self {
            _debouncer: debouncer,
            rx,
        })
    }

    /// Drain pending events. True when the file changed since the last
    /// call.
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => changed |= !events.is_empty(),
                Err(e) => tracing::warn!("showcase watch error: {e}"),
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_existing_file() {
        let path = std::env::temp_dir().join(format!("vitrine-watch-{}.yaml", std::process::id()));
        std::fs::write(&path, "brand:\n  name: Test\n  whatsapp: \"1\"\n")
            .expect("write temp showcase");
        let watcher = ShowcaseWatcher::new(&path).expect("watcher starts");
        assert!(!watcher.poll_changed(), "no change straight after start");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_watch_missing_file_fails() {
        let path = std::env::temp_dir().join("vitrine-watch-does-not-exist.yaml");
        assert!(ShowcaseWatcher::new(&path).is_err());
    }
}
