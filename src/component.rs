use std::cell::RefCell;

use dioxus::prelude::*;

use crate::{
    dispatcher::ContentDispatcher, observable::Subscription, source::LoadableSource,
    utils::CheapClone, views::ContentViews,
};

/// The source a mounted [AsyncContentView] currently observes
struct Binding<S> {
    source: S,
    dispatcher: CheapClone<RefCell<ContentDispatcher>>,
    _subscription: Subscription,
}

impl<S: LoadableSource> Binding<S> {
    fn new(source: S, revision: Signal<u64>) -> Self {
        log::debug!("AsyncContentView - subscribing to the source");
        let _subscription = source.subscribe(move |_| {
            let mut revision = revision;
            *revision.write() += 1;
        });
        Self {
            source,
            dispatcher: CheapClone::default(),
            _subscription,
        }
    }
}

/// Renders the view matching the current state of an asynchronous `source`.
///
/// - Idle: an empty fragment, and the source's `load()` is started
/// - Loading: `loading_view`, or an indeterminate spinner
/// - Failed: `error_view` called with the error, or an empty fragment
/// - Loaded: `content` called with the value
///
/// The component only observes the source: it subscribes to its state on
/// mount and re-renders on every change. `load()` runs once per fresh idle
/// entry on the component's scope, so unmounting the component cancels it.
/// Loads never overlap, an idle entry during a load queues another one.
///
/// When the `source` prop changes, the component drops the previous
/// subscription and observes the new source from scratch: a new source
/// sitting in idle gets loaded. Loads already started on the previous source
/// run to completion but are no longer rendered.
///
/// # Type Parameters
///
/// * `S` - The source type
///
/// # Parameters
///
/// * `source` - The object owning the load and its state
/// * `loading_view` - Optional view shown while loading
/// * `error_view` - Optional view shown on failure
/// * `content` - The view of the loaded value
///
/// # Examples
///
/// ```rust,no_run
/// use async_content_view::prelude::*;
///
/// #[component]
/// fn Motd(source: TaskSource<String>) -> Element {
///     rsx! {
///         AsyncContentView::<TaskSource<String>> {
///             source,
///             loading_view: move |_| rsx! { "Loading" },
///             error_view: move |e: CCStr| rsx! { "Failed with error: {e}" },
///             content: move |text: String| rsx! { p { "{text}" } },
///         }
///     }
/// }
/// ```
#[component]
pub fn AsyncContentView<S: LoadableSource>(
    source: S,
    loading_view: Option<Callback<(), Element>>,
    error_view: Option<Callback<S::Error, Element>>,
    content: Callback<S::Output, Element>,
) -> Element {
    log::debug!("AsyncContentView Rendered");

    let revision = use_signal(|| 0u64);
    let binding = use_hook(|| {
        CheapClone::new(RefCell::new(Binding::new(source.clone(), revision)))
    });
    if binding.borrow().source != source {
        log::debug!("AsyncContentView - source changed, rebinding");
        drop(binding.replace(Binding::new(source.clone(), revision)));
    }

    use_drop(|| log::debug!("AsyncContentView Dropped"));

    let mut views = ContentViews::new(move |v: S::Output| content.call(v));
    if let Some(loading_view) = loading_view {
        views = views.with_loading_view(move || loading_view.call(()));
    }
    if let Some(error_view) = error_view {
        views = views.with_error_view(move |e: S::Error| error_view.call(e));
    }

    // Re-render on every notification of the bound source
    let _ = revision();
    let current = source.loading_state();
    let dispatcher = CheapClone::clone(&binding.borrow().dispatcher);
    let rendered = dispatcher.borrow_mut().render(&current, &views);
    if rendered.trigger_load {
        log::debug!("AsyncContentView - starting load");
        let mut load = source.load();
        spawn(async move {
            loop {
                load.await;
                if !dispatcher.borrow_mut().load_completed() {
                    break;
                }
                log::debug!("AsyncContentView - starting queued load");
                load = source.load();
            }
            log::debug!("AsyncContentView - load finished");
        });
    }
    rendered.fragment
}
