//! Change monitoring for watch mode.
//!
//! The host-agnostic contract: a [`TextSource`] supplies the current text,
//! and a [`ChangeMonitor`] invokes a re-evaluation callback on every change
//! notification. Superseding events overwrite the previous render; each
//! callback is a fresh, bounded computation with no cancellation.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::debug;

use crate::error::{LegibleError, Result};
use crate::input::read_file;

/// Supplies the current text to evaluate. Implementations decide where the
/// text lives; the evaluation side never touches the filesystem directly.
pub trait TextSource {
    /// The current full text.
    fn load(&self) -> Result<String>;

    /// Display name for render headers.
    fn name(&self) -> String;
}

/// A [`TextSource`] backed by a file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl TextSource for FileSource {
    fn load(&self) -> Result<String> {
        read_file(&self.path)
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Watches one path for filesystem changes and drives a callback.
pub struct ChangeMonitor {
    path: PathBuf,
}

impl ChangeMonitor {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Block on change notifications, invoking `on_change` after each.
    ///
    /// Bursts of events are coalesced: all notifications queued behind the
    /// one being handled collapse into a single callback. Runs until the
    /// watcher's event channel closes or the callback returns an error.
    pub fn run<F>(&self, mut on_change: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |result: notify::Result<Event>| {
                if let Ok(event) = result {
                    if event.kind.is_modify() || event.kind.is_create() {
                        let _ = tx.send(());
                    }
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| self.watch_error(e))?;

        watcher
            .watch(&self.path, RecursiveMode::NonRecursive)
            .map_err(|e| self.watch_error(e))?;
        debug!(path = %self.path.display(), "watching for changes");

        while rx.recv().is_ok() {
            // Coalesce queued notifications into one re-evaluation.
            while rx.try_recv().is_ok() {}
            on_change()?;
        }
        Ok(())
    }

    fn watch_error(&self, source: notify::Error) -> LegibleError {
        LegibleError::WatchError {
            path: self.path.clone(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(&'static str);

    impl TextSource for StaticSource {
        fn load(&self) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> String {
            "static".to_string()
        }
    }

    #[test]
    fn file_source_loads_contents() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "watched text").unwrap();

        let source = FileSource::new(temp.path());
        assert_eq!(source.load().unwrap(), "watched text");
        assert!(source.name().contains(
            temp.path().file_name().unwrap().to_str().unwrap()
        ));
    }

    #[test]
    fn file_source_missing_file_is_domain_error() {
        let source = FileSource::new(Path::new("/no/such/file.txt"));
        assert!(matches!(
            source.load().unwrap_err(),
            LegibleError::FileNotFound { .. }
        ));
    }

    #[test]
    fn text_source_is_object_safe() {
        let source: Box<dyn TextSource> = Box::new(StaticSource("abc"));
        assert_eq!(source.load().unwrap(), "abc");
    }
}
