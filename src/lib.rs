//! # async-content-view
//!
//! Renders the view matching the loading state of an asynchronously loaded
//! value: nothing while idle, a loading view, an error view or the loaded
//! content.
//!
//! ## Core Concepts
//!
//! - [`LoadingState`](loading_state::LoadingState): the four mutually exclusive states of a load
//! - [`LoadableSource`](source::LoadableSource): the object owning the load and publishing its state
//! - [`AsyncContentView`](component::AsyncContentView): the component projecting a source's state onto a view
//! - [`ContentViews`](views::ContentViews) / [`ContentDispatcher`](dispatcher::ContentDispatcher):
//!   the render-framework independent dispatch rule and load guard
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use async_content_view::prelude::*;
//!
//! #[component]
//! fn Profile() -> Element {
//!     let source = use_hook(|| {
//!         TaskSource::new(|| async {
//!             async_content_view::utils::sleep_secs(1.0).await;
//!             Ok::<_, CCStr>("Ferris".to_owned())
//!         })
//!     });
//!     rsx! {
//!         AsyncContentView::<TaskSource<String>> {
//!             source,
//!             content: move |name: String| rsx! { h1 { "{name}" } },
//!         }
//!     }
//! }
//! ```

pub mod component;
pub mod demo;
pub mod dispatcher;
pub mod fragment;
pub mod loading_state;
pub mod observable;
pub mod source;
pub mod utils;
pub mod views;

/// Prelude module that re-exports commonly used types and traits.
///
/// ```rust
/// use async_content_view::prelude::*;
/// ```
pub mod prelude {
    pub use super::component::AsyncContentView;
    pub use super::dispatcher::{ContentDispatcher, LoadGuard, Rendered};
    pub use super::fragment::Fragment;
    pub use super::loading_state::LoadingState;
    pub use super::observable::{ObservableState, Subscription};
    pub use super::source::{LoadableSource, TaskSource};
    pub use super::utils::CCStr;
    pub use super::views::ContentViews;
    pub use dioxus::prelude::*;
}
