use crate::{fragment::Fragment, loading_state::LoadingState, utils::CCStr};

/// The render functions of an async content view.
///
/// Only the content builder is required. Without a loading view the
/// [Fragment::spinner] is rendered while loading; without an error view
/// failures render the [Fragment::empty] fragment.
///
/// # Type Parameters
///
/// * `V` - The loaded value type
/// * `E` - The load error type
/// * `R` - The render output, usually a dioxus `Element`
///
/// # Examples
///
/// ```rust
/// use async_content_view::prelude::*;
///
/// let views = ContentViews::<&str, CCStr, Element>::new(|text| rsx! { p { "{text}" } })
///     .with_loading_view(|| rsx! { "Loading" })
///     .with_error_view(|e| rsx! { "Failed with error: {e}" });
/// assert!(views.has_loading_view() && views.has_error_view());
/// ```
pub struct ContentViews<'a, V, E = CCStr, R = dioxus::prelude::Element> {
    loading_view: Option<Box<dyn Fn() -> R + 'a>>,
    error_view: Option<Box<dyn Fn(E) -> R + 'a>>,
    content: Box<dyn Fn(V) -> R + 'a>,
}

impl<'a, V, E, R> ContentViews<'a, V, E, R> {
    pub fn new<F: Fn(V) -> R + 'a>(content: F) -> Self {
        Self {
            loading_view: None,
            error_view: None,
            content: Box::new(content),
        }
    }

    pub fn with_loading_view<F: Fn() -> R + 'a>(mut self, loading_view: F) -> Self {
        self.loading_view = Some(Box::new(loading_view));
        self
    }

    pub fn with_error_view<F: Fn(E) -> R + 'a>(mut self, error_view: F) -> Self {
        self.error_view = Some(Box::new(error_view));
        self
    }

    pub fn has_loading_view(&self) -> bool {
        self.loading_view.is_some()
    }

    pub fn has_error_view(&self) -> bool {
        self.error_view.is_some()
    }
}

impl<V: Clone, E: Clone, R: Fragment> ContentViews<'_, V, E, R> {
    /// Renders the branch matching `state`
    pub fn render(&self, state: &LoadingState<V, E>) -> R {
        match state {
            LoadingState::Idle => R::empty(),
            LoadingState::Loading => match &self.loading_view {
                Some(loading_view) => loading_view(),
                None => R::spinner(),
            },
            LoadingState::Failed(e) => match &self.error_view {
                Some(error_view) => error_view(e.clone()),
                None => R::empty(),
            },
            LoadingState::Loaded(v) => (self.content)(v.clone()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{full_views, Frag, Views};
    use super::*;

    fn all_states() -> [LoadingState<&'static str>; 4] {
        [
            LoadingState::Idle,
            LoadingState::Loading,
            LoadingState::Failed("boom".into()),
            LoadingState::Loaded("X"),
        ]
    }

    #[test]
    fn each_state_renders_its_own_branch() {
        let views = full_views();
        let rendered = all_states().map(|s| views.render(&s));
        assert_eq!(
            rendered,
            [
                Frag::Empty,
                Frag::Loading,
                Frag::Error("boom".to_owned()),
                Frag::Content("X".to_owned()),
            ]
        );
    }

    #[test]
    fn default_loading_view_is_the_spinner() {
        let views = Views::new(|v| Frag::Content(v.to_owned()))
            .with_error_view(|e| Frag::Error(e.to_string()));
        assert!(!views.has_loading_view());
        assert_eq!(views.render(&LoadingState::Loading), Frag::Spinner);
        assert_eq!(
            views.render(&LoadingState::Failed("boom".into())),
            Frag::Error("boom".to_owned())
        );
    }

    #[test]
    fn default_error_view_is_empty() {
        let views = Views::new(|v| Frag::Content(v.to_owned())).with_loading_view(|| Frag::Loading);
        assert!(!views.has_error_view());
        assert_eq!(views.render(&LoadingState::Failed("boom".into())), Frag::Empty);
        assert_eq!(views.render(&LoadingState::Loading), Frag::Loading);
    }

    #[test]
    fn both_defaults() {
        let views = Views::new(|v| Frag::Content(v.to_owned()));
        let rendered = all_states().map(|s| views.render(&s));
        assert_eq!(
            rendered,
            [
                Frag::Empty,
                Frag::Spinner,
                Frag::Empty,
                Frag::Content("X".to_owned())
            ]
        );
    }
}
