use std::future::Future;

use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::{
    loading_state::LoadingState,
    observable::{ObservableState, Subscription},
    utils::{CCStr, CheapClone, EqCheapClone},
};

/// The capability an [AsyncContentView](crate::component::AsyncContentView)
/// needs from the object owning an asynchronous load.
///
/// The source is the single writer of its [LoadingState]. By convention its
/// [LoadableSource::load] moves the state `Idle -> Loading -> (Failed | Loaded)`,
/// but nothing enforces it: views only render whatever state is published.
///
/// # Examples
///
/// ```rust
/// use async_content_view::prelude::*;
/// use futures_util::future::{FutureExt, LocalBoxFuture};
///
/// #[derive(Clone, PartialEq)]
/// struct Greeting(ObservableState<&'static str>);
///
/// impl LoadableSource for Greeting {
///     type Output = &'static str;
///     type Error = CCStr;
///
///     fn state(&self) -> &ObservableState<&'static str> {
///         &self.0
///     }
///
///     fn load(&self) -> LocalBoxFuture<'static, ()> {
///         let state = self.0.clone();
///         async move { state.set(LoadingState::Loaded("hello")) }.boxed_local()
///     }
/// }
/// ```
pub trait LoadableSource: Clone + PartialEq + 'static {
    type Output: Clone + PartialEq + 'static;
    type Error: Clone + PartialEq + 'static;

    /// The published state of this source
    fn state(&self) -> &ObservableState<Self::Output, Self::Error>;

    /// Starts the load.
    ///
    /// The returned future must not borrow `self` so that it can be spawned
    /// on the UI executor.
    fn load(&self) -> LocalBoxFuture<'static, ()>;

    /// Synchronously reads the current state
    fn loading_state(&self) -> LoadingState<Self::Output, Self::Error> {
        self.state().get()
    }

    /// Registers an observer fired after every state change
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&LoadingState<Self::Output, Self::Error>) + 'static,
    {
        self.state().subscribe(observer)
    }
}

type Task<V, E> = dyn Fn() -> LocalBoxFuture<'static, Result<V, E>>;

/// A [LoadableSource] running an async closure.
///
/// Each [LoadableSource::load] publishes [LoadingState::Loading], awaits the
/// closure and publishes its outcome. [TaskSource::reset] goes back to
/// [LoadingState::Idle], which makes the view load again.
pub struct TaskSource<V, E = CCStr> {
    state: ObservableState<V, E>,
    task: EqCheapClone<Task<V, E>>,
}

impl<V, E> Clone for TaskSource<V, E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            task: self.task.clone(),
        }
    }
}
impl<V, E> PartialEq for TaskSource<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.task == other.task
    }
}
impl<V: core::fmt::Debug, E: core::fmt::Debug> core::fmt::Debug for TaskSource<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskSource")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<V: Clone + 'static, E: Clone + 'static> TaskSource<V, E> {
    pub fn new<F, Fut>(task: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<V, E>> + 'static,
    {
        let task: CheapClone<Task<V, E>> = CheapClone::new(move || task().boxed_local());
        Self {
            state: ObservableState::new(),
            task: task.into(),
        }
    }

    /// Goes back to [LoadingState::Idle]
    pub fn reset(&self) {
        log::debug!("TaskSource - reset");
        self.state.set(LoadingState::Idle);
    }
}

impl<V, E> LoadableSource for TaskSource<V, E>
where
    V: Clone + PartialEq + 'static,
    E: Clone + PartialEq + core::fmt::Display + 'static,
{
    type Output = V;
    type Error = E;

    fn state(&self) -> &ObservableState<V, E> {
        &self.state
    }

    fn load(&self) -> LocalBoxFuture<'static, ()> {
        let state = self.state.clone();
        let fut = (*self.task)();
        async move {
            log::debug!("TaskSource - loading");
            state.set(LoadingState::Loading);
            match fut.await {
                Ok(v) => {
                    log::debug!("TaskSource - loaded");
                    state.set(LoadingState::Loaded(v));
                }
                Err(e) => {
                    log::warn!("TaskSource - load failed: {e}");
                    state.set(LoadingState::Failed(e));
                }
            }
        }
        .boxed_local()
    }
}
