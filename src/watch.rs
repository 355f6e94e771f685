//! File system watcher for live rebuild.
//!
//! Monitors the data file, asset source directories and config file, and
//! requests a rebuild through the [`BuildCoordinator`] when they change.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Event Loop                            │
//! │                                                            │
//! │  ┌──────────┐    ┌──────────┐    ┌──────────────────────┐  │
//! │  │ notify   │───▶│ Debouncer│───▶│ coordinator.trigger()│  │
//! │  │ events   │    │ (300ms)  │    │  (coalesces bursts   │  │
//! │  └──────────┘    └──────────┘    │   into one rebuild)  │  │
//! │                                  └──────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The debouncer batches raw editor events; the coordinator serializes the
//! builds themselves. Events for paths inside the output directory are
//! ignored, so builds never trigger further builds.

use crate::{build, config::SiteConfig, coordinator::BuildCoordinator, log, logger::WatchStatus};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

// =============================================================================
// Constants
// =============================================================================

const DEBOUNCE_MS: u64 = 300;

// =============================================================================
// Path Utilities
// =============================================================================

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Format path as relative to root for log display.
fn rel_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events before handing them to the coordinator.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
        }
    }

    fn add(&mut self, event: Event, output: &Path) {
        for path in event.paths {
            if !is_temp_file(&path) && !path.starts_with(output) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Watcher Setup
// =============================================================================

/// Paths a change in which should rebuild the site.
///
/// The data file is watched through its parent directory: editors replace
/// files via rename, which drops a watch on the file itself.
fn watch_paths(config: &SiteConfig) -> Vec<(PathBuf, RecursiveMode)> {
    let root = config.get_root();
    let mut paths = Vec::new();

    if let Some(data_dir) = config.build.data.parent() {
        paths.push((data_dir.to_path_buf(), RecursiveMode::NonRecursive));
    }
    for dir in config.build.volatile.iter().chain(&config.build.stable) {
        paths.push((root.join(dir), RecursiveMode::Recursive));
    }
    for file in &config.build.static_files {
        if let Some(parent) = root.join(file).parent() {
            paths.push((parent.to_path_buf(), RecursiveMode::NonRecursive));
        }
    }
    paths.push((config.config_path.clone(), RecursiveMode::NonRecursive));

    paths.sort_by(|a, b| a.0.cmp(&b.0));
    paths.dedup_by(|a, b| a.0 == b.0);
    paths.retain(|(path, _)| path.exists() && !path.starts_with(&config.build.output));
    paths
}

fn setup_watchers(watcher: &mut impl Watcher, config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    let paths = watch_paths(config);

    for (path, mode) in &paths {
        watcher
            .watch(path, *mode)
            .with_context(|| format!("Failed to watch: {}", path.display()))?;
    }

    let summary: Vec<_> = paths
        .iter()
        .map(|(path, _)| rel_path(path, root))
        .collect();
    log!("watch"; "watching: {}", summary.join(", "));
    eprintln!(); // Blank line to separate init logs from change events
    Ok(())
}

const fn is_relevant(event: &Event) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
}

// =============================================================================
// Public API
// =============================================================================

/// Start blocking file watcher with debouncing and coalesced rebuilds.
pub fn watch_for_changes_blocking(config: &'static SiteConfig) -> Result<()> {
    if !config.serve.watch {
        return Ok(());
    }

    // Rebuild outcomes go through a single overwriting status line; the
    // pipeline reports for itself, so the coordinator sees only Ok.
    let status = Mutex::new(WatchStatus::new());
    let coordinator = BuildCoordinator::new(
        config.debounce(),
        Box::new(move || {
            match build::build_site(config) {
                Ok(()) => status.lock().success("rebuilt"),
                Err(err) => status.lock().error("build failed", &format!("{err:#}")),
            }
            Ok(())
        }),
    );

    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    setup_watchers(&mut watcher, config)?;

    let root = config.get_root().to_path_buf();
    let output = config.build.output.clone();
    let mut debouncer = Debouncer::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) => {
                debouncer.add(event, &output);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) if debouncer.ready() => {
                let changed = debouncer.take();
                let summary: Vec<_> = changed.iter().map(|p| rel_path(p, &root)).collect();
                log!("watch"; "{} changed, rebuilding...", summary.join(", "));
                coordinator.trigger();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            // Other cases: irrelevant events, timeout without ready, etc.
            _ => {}
        }
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_temp_file() {
        assert!(is_temp_file(Path::new("data/resume-data.json.swp")));
        assert!(is_temp_file(Path::new("data/resume-data.json~")));
        assert!(is_temp_file(Path::new("data/.resume-data.json.tmp")));
        assert!(!is_temp_file(Path::new("data/resume-data.json")));
        assert!(!is_temp_file(Path::new("css/resume.css")));
    }

    #[test]
    fn test_debouncer_batches_and_drains() {
        let mut debouncer = Debouncer::new();
        let output = Path::new("/project/dist");

        let event = Event {
            kind: EventKind::Modify(notify::event::ModifyKind::Any),
            paths: vec![
                PathBuf::from("/project/data/resume-data.json"),
                PathBuf::from("/project/data/resume-data.json"),
                PathBuf::from("/project/css/resume.css"),
            ],
            attrs: Default::default(),
        };
        debouncer.add(event, output);

        assert!(!debouncer.ready()); // debounce window still open
        let changed = debouncer.take();
        assert_eq!(changed.len(), 2); // duplicates collapsed
        assert!(debouncer.take().is_empty());
    }

    #[test]
    fn test_debouncer_ignores_output_and_temp_paths() {
        let mut debouncer = Debouncer::new();
        let output = Path::new("/project/dist");

        let event = Event {
            kind: EventKind::Create(notify::event::CreateKind::Any),
            paths: vec![
                PathBuf::from("/project/dist/index.html"),
                PathBuf::from("/project/data/resume-data.json.swp"),
            ],
            attrs: Default::default(),
        };
        debouncer.add(event, output);

        assert!(debouncer.take().is_empty());
    }

    #[test]
    fn test_watch_paths_exclude_output() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("data")).unwrap();
        std::fs::create_dir_all(root.join("css")).unwrap();
        std::fs::create_dir_all(root.join("dist/css")).unwrap();
        std::fs::write(root.join("vitae.toml"), "").unwrap();

        let mut config = SiteConfig::default();
        config.set_root(root);
        config.build.data = root.join("data/resume-data.json");
        config.build.output = root.join("dist");
        config.config_path = root.join("vitae.toml");

        let paths = watch_paths(&config);
        assert!(paths.iter().any(|(p, _)| p == &root.join("data")));
        assert!(paths.iter().any(|(p, _)| p == &root.join("css")));
        assert!(paths.iter().any(|(p, _)| p == &root.join("vitae.toml")));
        assert!(paths.iter().all(|(p, _)| !p.starts_with(root.join("dist"))));
    }
}
