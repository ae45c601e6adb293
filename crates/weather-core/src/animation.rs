//! Scroll animation driver
//!
//! One animation at most is in flight. Starting a new one cancels the old
//! one; every job carries a generation so a cancelled task that is already
//! past its await point cannot touch the selection.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::screen::MainScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnimationControl {
    Run,
    Cancel,
}

struct AnimationJob {
    target: usize,
    control: watch::Sender<AnimationControl>,
}

impl AnimationJob {
    fn cancel(self) {
        let _ = self.control.send(AnimationControl::Cancel);
    }
}

#[derive(Default)]
struct AnimationSlot {
    generation: u64,
    job: Option<AnimationJob>,
}

#[derive(Clone, Default)]
pub(crate) struct PageAnimator {
    slot: Arc<Mutex<AnimationSlot>>,
}

impl PageAnimator {
    /// Scroll the page surface of `screen` to `target`, superseding any
    /// animation still running.
    pub(crate) fn start(&self, screen: &MainScreen, target: usize, step: Duration) -> u64 {
        let mut slot = self.slot.lock();
        if let Some(previous) = slot.job.take() {
            tracing::debug!(
                from = previous.target,
                to = target,
                "Superseding scroll animation"
            );
            previous.cancel();
        }

        slot.generation += 1;
        let generation = slot.generation;

        let (tx, rx) = watch::channel(AnimationControl::Run);
        slot.job = Some(AnimationJob {
            target,
            control: tx,
        });

        screen
            .runtime()
            .spawn(run_scroll(screen.clone(), generation, target, step, rx));

        generation
    }

    /// Cancel the running animation, returning its target
    pub(crate) fn cancel(&self) -> Option<usize> {
        let mut slot = self.slot.lock();
        let job = slot.job.take()?;
        slot.generation += 1;

        let target = job.target;
        job.cancel();
        tracing::debug!(target, "Scroll animation cancelled");
        Some(target)
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        let slot = self.slot.lock();
        slot.job.is_some() && slot.generation == generation
    }

    pub(crate) fn finish(&self, generation: u64) {
        let mut slot = self.slot.lock();
        if slot.generation == generation {
            slot.job = None;
        }
    }

    pub(crate) fn in_flight(&self) -> Option<usize> {
        self.slot.lock().job.as_ref().map(|job| job.target)
    }
}

async fn run_scroll(
    screen: MainScreen,
    generation: u64,
    target: usize,
    step: Duration,
    mut control: watch::Receiver<AnimationControl>,
) {
    loop {
        let Some(position) = screen.pager_position_for(generation) else {
            return;
        };
        if position == target {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(step) => {}
            _ = control.changed() => return,
        }

        let next = if position < target {
            position + 1
        } else {
            position - 1
        };

        if !screen.apply_scroll_step(generation, next) {
            return;
        }
    }

    screen.finish_scroll(generation, target);
}
