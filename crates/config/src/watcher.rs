use crate::{load, ToolbarConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Events closer together than this collapse into a single reload.
const SETTLE: Duration = Duration::from_millis(150);

/// Watches the toolbar config file and delivers a freshly parsed
/// [`ToolbarConfig`] every time it changes on disk.
///
/// The parent directory is watched rather than the file itself so that
/// editors which save by rename are still picked up.  A file that fails to
/// parse is logged and skipped; the previous config stays in effect.
///
/// ```ignore
/// let (_watcher, mut rx) = ConfigWatcher::spawn(toolbar_config::default_path());
/// while let Some(cfg) = rx.recv().await {
///     apply(cfg);
/// }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn the watch task on the current tokio runtime.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<ToolbarConfig>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();

        tokio::spawn(watch_loop(path.clone(), tx));

        (Self { path }, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<ToolbarConfig>) {
    use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (raw_tx, mut raw_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = raw_tx.blocking_send(res);
        },
        Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching toolbar config: {}", path.display());

    while let Some(event) = raw_rx.recv().await {
        let touches_config = match event {
            Ok(e) => {
                matches!(e.kind, EventKind::Modify(_) | EventKind::Create(_))
                    && e.paths.iter().any(|p| p.file_name() == path.file_name())
            }
            Err(e) => {
                warn!("Watcher error: {e}");
                false
            }
        };
        if !touches_config {
            continue;
        }

        // Drain the burst a single save produces.
        tokio::time::sleep(SETTLE).await;
        while raw_rx.try_recv().is_ok() {}

        match load(&path) {
            Ok(cfg) => {
                debug!("Reloaded toolbar config");
                if tx.send(cfg).await.is_err() {
                    break; // receiver dropped
                }
            }
            Err(e) => warn!("Ignoring invalid toolbar config: {e}"),
        }
    }
}
