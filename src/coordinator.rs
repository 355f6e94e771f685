//! Rebuild coalescing.
//!
//! Watch events can fire far faster than a build runs, and a build must
//! never overlap another: both write the same output tree. The coordinator
//! serializes builds behind a three-state guard:
//!
//! - `Idle`: no build running, a trigger starts one.
//! - `Running`: a build is in progress, a trigger marks a follow-up.
//! - `RunningWithPending`: follow-up already marked, further triggers
//!   are dropped. Any number of triggers during one build collapse into
//!   exactly one follow-up.
//!
//! When a build finishes with a follow-up pending, the coordinator waits
//! the debounce delay so a burst of file events settles, then triggers
//! itself again. A failed build resets the guard the same way a
//! successful one does, so the next trigger always starts a fresh build.

use crate::log;
use parking_lot::Mutex;
use std::{sync::Arc, thread, time::Duration};

/// Guard states. Strictly more restrictive left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Running,
    RunningWithPending,
}

type Pipeline = Box<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

/// Serializes build-pipeline runs and coalesces triggers.
pub struct BuildCoordinator {
    state: Mutex<GuardState>,
    debounce: Duration,
    pipeline: Pipeline,
}

impl BuildCoordinator {
    pub fn new(debounce: Duration, pipeline: Pipeline) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(GuardState::Idle),
            debounce,
            pipeline,
        })
    }

    /// Request a build. Returns immediately; the build itself runs on a
    /// worker thread. Safe to call from any thread at any rate.
    pub fn trigger(self: &Arc<Self>) {
        {
            let mut state = self.state.lock();
            match *state {
                GuardState::Idle => *state = GuardState::Running,
                GuardState::Running => {
                    *state = GuardState::RunningWithPending;
                    return;
                }
                GuardState::RunningWithPending => return,
            }
        }

        let coordinator = Arc::clone(self);
        thread::spawn(move || coordinator.run());
    }

    /// Current guard state.
    pub fn state(&self) -> GuardState {
        *self.state.lock()
    }

    fn run(self: Arc<Self>) {
        if let Err(err) = (self.pipeline)() {
            log!("error"; "Build failed: {err:#}");
        }

        // Reset the guard before scheduling the follow-up: the pending
        // build must observe Idle and start like any other trigger.
        let pending = {
            let mut state = self.state.lock();
            let pending = *state == GuardState::RunningWithPending;
            *state = GuardState::Idle;
            pending
        };

        if pending {
            thread::sleep(self.debounce);
            self.trigger();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc,
    };
    use std::time::Instant;

    fn wait_for_runs(counter: &AtomicUsize, expected: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while counter.load(Ordering::SeqCst) < expected {
            assert!(Instant::now() < deadline, "timed out waiting for {expected} runs");
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn wait_for_idle(coordinator: &Arc<BuildCoordinator>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while coordinator.state() != GuardState::Idle {
            assert!(Instant::now() < deadline, "timed out waiting for Idle");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_trigger_runs_pipeline() {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_in_pipeline = Arc::clone(&runs);
        let coordinator = BuildCoordinator::new(
            Duration::from_millis(1),
            Box::new(move || {
                runs_in_pipeline.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        );

        coordinator.trigger();
        wait_for_runs(&runs, 1);
        wait_for_idle(&coordinator);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_triggers_during_build_coalesce_to_one_followup() {
        let runs = Arc::new(AtomicUsize::new(0));
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let release_rx = std::sync::Mutex::new(release_rx);

        let runs_in_pipeline = Arc::clone(&runs);
        let coordinator = BuildCoordinator::new(
            Duration::from_millis(1),
            Box::new(move || {
                let run = runs_in_pipeline.fetch_add(1, Ordering::SeqCst);
                if run == 0 {
                    // First build blocks until the test has fired all triggers
                    release_rx.lock().unwrap().recv().ok();
                }
                Ok(())
            }),
        );

        coordinator.trigger();
        wait_for_runs(&runs, 1);

        // Burst of triggers while the first build is blocked
        for _ in 0..10 {
            coordinator.trigger();
        }
        assert_eq!(coordinator.state(), GuardState::RunningWithPending);

        release_tx.send(()).unwrap();
        wait_for_runs(&runs, 2);
        wait_for_idle(&coordinator);

        // Ten coalesced triggers produced exactly one follow-up build
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_trigger_while_idle_starts_independent_build() {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_in_pipeline = Arc::clone(&runs);
        let coordinator = BuildCoordinator::new(
            Duration::from_millis(1),
            Box::new(move || {
                runs_in_pipeline.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        );

        coordinator.trigger();
        wait_for_runs(&runs, 1);
        wait_for_idle(&coordinator);

        coordinator.trigger();
        wait_for_runs(&runs, 2);
        wait_for_idle(&coordinator);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failed_build_resets_guard() {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_in_pipeline = Arc::clone(&runs);
        let coordinator = BuildCoordinator::new(
            Duration::from_millis(1),
            Box::new(move || {
                runs_in_pipeline.fetch_add(1, Ordering::SeqCst);
                anyhow::bail!("data file invalid")
            }),
        );

        coordinator.trigger();
        wait_for_runs(&runs, 1);
        wait_for_idle(&coordinator);

        // The failure did not wedge the guard
        coordinator.trigger();
        wait_for_runs(&runs, 2);
        wait_for_idle(&coordinator);
    }

    #[test]
    fn test_followup_runs_after_failed_build() {
        let runs = Arc::new(AtomicUsize::new(0));
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let release_rx = std::sync::Mutex::new(release_rx);

        let runs_in_pipeline = Arc::clone(&runs);
        let coordinator = BuildCoordinator::new(
            Duration::from_millis(1),
            Box::new(move || {
                let run = runs_in_pipeline.fetch_add(1, Ordering::SeqCst);
                if run == 0 {
                    release_rx.lock().unwrap().recv().ok();
                    anyhow::bail!("first build fails")
                }
                Ok(())
            }),
        );

        coordinator.trigger();
        wait_for_runs(&runs, 1);
        coordinator.trigger();

        release_tx.send(()).unwrap();
        wait_for_runs(&runs, 2);
        wait_for_idle(&coordinator);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
