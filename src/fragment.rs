use dioxus::prelude::*;

/// The render outputs an [AsyncContentView](crate::component::AsyncContentView)
/// falls back to when the caller does not provide its own views.
///
/// Implemented for dioxus [Element]; any other render target (a test
/// recorder, a text renderer, ...) can implement it to reuse
/// [ContentViews](crate::views::ContentViews).
///
/// # Examples
///
/// ```rust
/// use async_content_view::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Text(String);
///
/// impl Fragment for Text {
///     fn empty() -> Self {
///         Text(String::new())
///     }
///
///     fn spinner() -> Self {
///         Text("...".to_owned())
///     }
/// }
/// ```
pub trait Fragment {
    /// An invisible fragment, rendered while idle and for failures without
    /// an error view
    fn empty() -> Self;

    /// An indeterminate progress indicator, rendered while loading without
    /// a loading view
    fn spinner() -> Self;
}

impl Fragment for Element {
    #[inline(always)]
    fn empty() -> Self {
        rsx! {}
    }
    #[inline(always)]
    fn spinner() -> Self {
        // A progress element without value is indeterminate
        rsx! {
            progress { class: "progress" }
        }
    }
}
