use crate::{fragment::Fragment, loading_state::LoadingState, views::ContentViews};

/// Decides when a view must start its source's load.
///
/// A load is started once per *fresh idle entry*: the first time the view
/// observes [LoadingState::Idle], and again only after the source went
/// through any other state and came back to idle. Re-renders while idle do
/// not start anything.
///
/// Loads never overlap. When a fresh idle entry happens while a previous
/// load is still running, one follow-up load is queued and started by
/// [LoadGuard::complete].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadGuard {
    armed: bool,
    in_flight: bool,
    queued: bool,
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadGuard {
    pub fn new() -> Self {
        Self {
            armed: true,
            in_flight: false,
            queued: false,
        }
    }

    /// Observes the current state; returns true when a load must be started
    /// right now
    pub fn observe<V, E>(&mut self, state: &LoadingState<V, E>) -> bool {
        if !state.is_idle() {
            self.armed = true;
            return false;
        }
        if !self.armed {
            return false;
        }
        self.armed = false;
        if self.in_flight {
            log::debug!("LoadGuard - load already in flight, queueing");
            self.queued = true;
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// Signals the end of the running load; returns true when a queued load
    /// must be started right away
    pub fn complete(&mut self) -> bool {
        if self.queued {
            self.queued = false;
            true
        } else {
            self.in_flight = false;
            false
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

/// The output of one [ContentDispatcher::render] pass
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<R> {
    /// The fragment matching the current state
    pub fragment: R,
    /// Whether the caller must start the source's load now
    pub trigger_load: bool,
}

/// Projects a [LoadingState] onto its view branch and tells the caller when
/// to load.
///
/// This is the render-framework independent core of
/// [AsyncContentView](crate::component::AsyncContentView).
#[derive(Debug, Default)]
pub struct ContentDispatcher {
    guard: LoadGuard,
}

impl ContentDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<V: Clone, E: Clone, R: Fragment>(
        &mut self,
        state: &LoadingState<V, E>,
        views: &ContentViews<'_, V, E, R>,
    ) -> Rendered<R> {
        let trigger_load = self.guard.observe(state);
        Rendered {
            fragment: views.render(state),
            trigger_load,
        }
    }

    /// See [LoadGuard::complete]
    pub fn load_completed(&mut self) -> bool {
        self.guard.complete()
    }

    pub fn is_loading_in_flight(&self) -> bool {
        self.guard.is_in_flight()
    }
}
