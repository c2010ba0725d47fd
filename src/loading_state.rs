use crate::utils::CCStr;

/// The lifecycle phase of one asynchronous load operation.
///
/// Exactly one variant is active at a time. The state is owned and mutated by
/// the source performing the load; views only read it.
///
/// # Type Parameters
///
/// * `V` - The payload type carried once loaded
/// * `E` - The error type carried on failure, a cheap-clone message by default
///
/// # Examples
///
/// ```rust
/// use async_content_view::prelude::*;
///
/// let state: LoadingState<u32> = LoadingState::default();
/// assert!(state.is_idle());
///
/// let state: LoadingState<u32> = Some(Ok(42)).into();
/// assert_eq!(state.loaded(), Some(&42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingState<V, E = CCStr> {
    /// Nothing was requested yet
    Idle,
    /// A load is running
    Loading,
    /// The load failed with the carried error
    Failed(E),
    /// The load succeeded with the carried value
    Loaded(V),
}

impl<V, E> Default for LoadingState<V, E> {
    fn default() -> Self {
        LoadingState::Idle
    }
}

impl<V, E> LoadingState<V, E> {
    /// True iff the variant is [LoadingState::Loading]
    pub fn is_loading(&self) -> bool {
        match self {
            LoadingState::Idle | LoadingState::Failed(_) | LoadingState::Loaded(_) => false,
            LoadingState::Loading => true,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, LoadingState::Idle)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadingState::Failed(_))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    /// Returns the loaded value, if any
    pub fn loaded(&self) -> Option<&V> {
        match self {
            LoadingState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the load error, if any
    pub fn error(&self) -> Option<&E> {
        match self {
            LoadingState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> LoadingState<&V, &E> {
        match self {
            LoadingState::Idle => LoadingState::Idle,
            LoadingState::Loading => LoadingState::Loading,
            LoadingState::Failed(e) => LoadingState::Failed(e),
            LoadingState::Loaded(v) => LoadingState::Loaded(v),
        }
    }

    /// Maps the loaded value, leaving the other variants untouched.
    ///
    /// ```rust
    /// use async_content_view::prelude::*;
    ///
    /// let state: LoadingState<&str> = LoadingState::Loaded("rust");
    /// assert_eq!(state.map(str::len), LoadingState::Loaded(4));
    /// ```
    pub fn map<U, F: FnOnce(V) -> U>(self, f: F) -> LoadingState<U, E> {
        match self {
            LoadingState::Idle => LoadingState::Idle,
            LoadingState::Loading => LoadingState::Loading,
            LoadingState::Failed(e) => LoadingState::Failed(e),
            LoadingState::Loaded(v) => LoadingState::Loaded(f(v)),
        }
    }

    /// Maps the error, leaving the other variants untouched.
    pub fn map_err<F2, F: FnOnce(E) -> F2>(self, f: F) -> LoadingState<V, F2> {
        match self {
            LoadingState::Idle => LoadingState::Idle,
            LoadingState::Loading => LoadingState::Loading,
            LoadingState::Failed(e) => LoadingState::Failed(f(e)),
            LoadingState::Loaded(v) => LoadingState::Loaded(v),
        }
    }
}

/// Bridges values shaped like a dioxus resource read: `None` while the
/// future has not resolved, then its result.
impl<V, E> From<Option<Result<V, E>>> for LoadingState<V, E> {
    fn from(value: Option<Result<V, E>>) -> Self {
        match value {
            None => LoadingState::Loading,
            Some(r) => r.into(),
        }
    }
}

impl<V, E> From<Result<V, E>> for LoadingState<V, E> {
    fn from(value: Result<V, E>) -> Self {
        match value {
            Ok(v) => LoadingState::Loaded(v),
            Err(e) => LoadingState::Failed(e),
        }
    }
}
