//! Main screen state container
//!
//! Owns the selection and fans every change out to subscribed views. The
//! host forwards gestures through the `on_*` handlers; nothing here returns
//! an error to the host, bad input is logged and dropped.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;

use weather_pager::{PageSyncController, SyncOutcome, SyncPhase};
use weather_tabs::TabItem;

use crate::animation::PageAnimator;
use crate::config::Config;
use crate::error::CoreError;
use crate::location::{LocationResolver, PlaceholderLocation};
use crate::render::ScreenContent;
use crate::Result;

/// Snapshot published to views after every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRequest {
    pub active_index: usize,
    pub active_tab: TabItem,
    pub query: String,
    pub pager_position: usize,
    pub phase: SyncPhase,
    /// Page the surface is being scrolled to
    pub pending_scroll: Option<usize>,
    /// Bumped on every publish
    pub revision: u64,
}

impl RenderRequest {
    pub fn from_sync(sync: &PageSyncController, revision: u64) -> Self {
        let state = sync.state();
        Self {
            active_index: state.active_index(),
            active_tab: state.active_tab(),
            query: state.query().to_string(),
            pager_position: state.pager_position(),
            phase: state.phase(),
            pending_scroll: sync.scroll_target(),
            revision,
        }
    }
}

pub struct MainScreen {
    config: Arc<Config>,
    sync: Arc<RwLock<PageSyncController>>,
    renders: Arc<watch::Sender<RenderRequest>>,
    animator: PageAnimator,
    location: Arc<dyn LocationResolver>,
    runtime: Handle,
    mounted: Arc<AtomicBool>,
}

impl MainScreen {
    /// Mount the screen with the placeholder location lookup
    pub fn mount(config: Config) -> Result<Self> {
        let location = PlaceholderLocation::new(config.geolocation_marker.clone());
        Self::mount_with_location(config, Arc::new(location))
    }

    /// Mount the screen. Must be called from inside a tokio runtime.
    pub fn mount_with_location(
        config: Config,
        location: Arc<dyn LocationResolver>,
    ) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| CoreError::NoRuntime)?;

        let sync = PageSyncController::new(config.initial_tab);
        let (renders, _) = watch::channel(RenderRequest::from_sync(&sync, 0));

        tracing::info!(initial_tab = %config.initial_tab, "Main screen mounted");

        Ok(Self {
            config: Arc::new(config),
            sync: Arc::new(RwLock::new(sync)),
            renders: Arc::new(renders),
            animator: PageAnimator::default(),
            location,
            runtime,
            mounted: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Cancel pending work. Events arriving afterwards are ignored.
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::SeqCst) {
            let _sync = self.sync.write();
            self.animator.cancel();
            tracing::info!("Main screen unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Receive every render request from now on
    pub fn subscribe(&self) -> watch::Receiver<RenderRequest> {
        self.renders.subscribe()
    }

    /// Latest published render request
    pub fn snapshot(&self) -> RenderRequest {
        self.renders.borrow().clone()
    }

    /// Frame for the latest render request
    pub fn content(&self) -> ScreenContent {
        ScreenContent::compose(&self.snapshot(), &self.config.search_placeholder)
    }

    /// Target of the scroll animation in flight, if any
    pub fn animating_to(&self) -> Option<usize> {
        self.animator.in_flight()
    }

    // === Tab bar ===

    pub fn on_tap(&self, index: usize) -> SyncOutcome {
        if !self.is_mounted() {
            return SyncOutcome::default();
        }

        let mut sync = self.sync.write();
        let outcome = match sync.on_tab_tap(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(index, error = %e, "Ignoring tab tap");
                return SyncOutcome::default();
            }
        };

        if let Some(target) = outcome.animate_to {
            self.animator.start(self, target, self.config.animation_step());
        }
        if outcome.changed {
            self.publish(&sync);
        }

        outcome
    }

    /// Tap by route key; unknown routes select the first tab
    pub fn on_route(&self, route: &str) -> SyncOutcome {
        self.on_tap(weather_tabs::TabCatalog::by_route(route).id)
    }

    // === Search bar ===

    pub fn on_text_changed(&self, text: impl Into<String>) -> SyncOutcome {
        self.mutate(|sync| sync.set_query(text))
    }

    pub fn on_geolocation_tap(&self) -> SyncOutcome {
        let location = self.location.resolve_current_location();
        if location.is_placeholder() {
            tracing::debug!("Geolocation is a placeholder, substituting marker query");
        }
        self.mutate(|sync| sync.set_geolocation_requested(location.query_text()))
    }

    // === Page surface ===
    //
    // Signals coming from the surface itself take over from the built-in
    // scroll animation.

    pub fn on_swipe_progress(&self, in_progress: bool) -> SyncOutcome {
        self.mutate(|sync| {
            Self::interrupt_scroll(sync, &self.animator);
            sync.on_scroll_progress(in_progress)
        })
    }

    pub fn on_page_changed(&self, page: usize) -> SyncOutcome {
        self.mutate(|sync| sync.on_current_page(page))
    }

    pub fn on_swipe_settle(&self, page: usize) -> SyncOutcome {
        self.mutate(|sync| {
            Self::interrupt_scroll(sync, &self.animator);
            sync.on_swipe_settle(page)
        })
    }

    // === Animation callbacks ===

    pub(crate) fn runtime(&self) -> &Handle {
        &self.runtime
    }

    pub(crate) fn pager_position_for(&self, generation: u64) -> Option<usize> {
        let sync = self.sync.read();
        self.animator
            .is_current(generation)
            .then(|| sync.state().pager_position())
    }

    pub(crate) fn apply_scroll_step(&self, generation: u64, page: usize) -> bool {
        let mut sync = self.sync.write();
        if !self.is_mounted() || !self.animator.is_current(generation) {
            return false;
        }

        if sync.on_current_page(page).changed {
            self.publish(&sync);
        }
        true
    }

    pub(crate) fn finish_scroll(&self, generation: u64, target: usize) {
        let mut sync = self.sync.write();
        if !self.is_mounted() || !self.animator.is_current(generation) {
            return;
        }

        self.animator.finish(generation);
        if sync.on_swipe_settle(target).changed {
            self.publish(&sync);
        }
    }

    fn interrupt_scroll(sync: &mut PageSyncController, animator: &PageAnimator) {
        if sync.cancel_scroll().is_some() {
            animator.cancel();
        }
    }

    fn mutate<F>(&self, f: F) -> SyncOutcome
    where
        F: FnOnce(&mut PageSyncController) -> SyncOutcome,
    {
        if !self.is_mounted() {
            return SyncOutcome::default();
        }

        let mut sync = self.sync.write();
        let outcome = f(&mut *sync);
        if outcome.changed {
            self.publish(&sync);
        }
        outcome
    }

    fn publish(&self, sync: &PageSyncController) {
        self.renders.send_modify(|current| {
            let revision = current.revision + 1;
            *current = RenderRequest::from_sync(sync, revision);
        });
    }
}

impl Clone for MainScreen {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            sync: Arc::clone(&self.sync),
            renders: Arc::clone(&self.renders),
            animator: self.animator.clone(),
            location: Arc::clone(&self.location),
            runtime: self.runtime.clone(),
            mounted: Arc::clone(&self.mounted),
        }
    }
}
