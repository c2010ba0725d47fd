//! Preview of [AsyncContentView] with sample sources.
//!
//! Launched by the `async-content-view-demo` binary.

use crate::prelude::*;
use crate::utils::{log_error_ccstr, sleep_secs, timestamp_to_string};

/// How long the delayed sample source stays in the loading state
pub const DEMO_DELAY_SECS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Greeting {
    pub text: CCStr,
    pub loaded_at: i64,
}
impl Greeting {
    fn now(text: &str) -> Self {
        Self {
            text: CCStr::from(text),
            loaded_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// A source loading without delay
pub fn sample_source() -> TaskSource<Greeting> {
    TaskSource::new(|| async { Ok(Greeting::now("Rust 🦀")) })
}

/// A source loading after [DEMO_DELAY_SECS]
pub fn sample_delayed_source() -> TaskSource<Greeting> {
    TaskSource::new(|| async {
        sleep_secs(DEMO_DELAY_SECS).await;
        Ok(Greeting::now("Rust 🦀🦀🦀🦀"))
    })
}

/// A source failing after [DEMO_DELAY_SECS]
pub fn sample_failing_source() -> TaskSource<Greeting> {
    TaskSource::new(|| async {
        sleep_secs(DEMO_DELAY_SECS).await;
        Err(log_error_ccstr("the sample source always fails"))
    })
}

#[component]
pub fn DemoView() -> Element {
    log::debug!("DemoView Rendered");

    let immediate = use_hook(sample_source);
    let delayed = use_hook(sample_delayed_source);
    let failing = use_hook(sample_failing_source);

    use_drop(|| log::debug!("DemoView Dropped"));

    rsx! {
        div { class: "flex flex-col gap-4 p-4",
            DemoCard { title: "Immediate, default views",
                AsyncContentView::<TaskSource<Greeting>> {
                    source: immediate,
                    content: move |g: Greeting| rsx! {
                        GreetingText { greeting: g }
                    },
                }
            }
            DemoCard { title: "Delayed",
                AsyncContentView::<TaskSource<Greeting>> {
                    source: delayed.clone(),
                    loading_view: move |_| rsx! {
                        progress { class: "progress w-16 mr-2" }
                        "Loading"
                    },
                    error_view: move |e: CCStr| rsx! {
                        p { class: "text-error", "Failed with error: {e}" }
                    },
                    content: move |g: Greeting| rsx! {
                        GreetingText { greeting: g }
                    },
                }
                ReloadButton { source: delayed }
            }
            DemoCard { title: "Failing",
                AsyncContentView::<TaskSource<Greeting>> {
                    source: failing.clone(),
                    error_view: move |e: CCStr| rsx! {
                        p { class: "text-error", "Failed with error: {e}" }
                    },
                    content: move |g: Greeting| rsx! {
                        GreetingText { greeting: g }
                    },
                }
                ReloadButton { source: failing }
            }
        }
    }
}

#[component]
fn GreetingText(greeting: Greeting) -> Element {
    let loaded_at = timestamp_to_string(greeting.loaded_at);
    rsx! {
        p { class: "text-lg font-semibold", "{greeting.text}" }
        p { class: "text-sm text-base-content/60", "Loaded at {loaded_at}" }
    }
}

#[component]
fn ReloadButton(source: TaskSource<Greeting>) -> Element {
    rsx! {
        button {
            class: "btn btn-sm btn-outline mt-2",
            onclick: move |_| source.reset(),
            "Reload"
        }
    }
}

#[component]
fn DemoCard(title: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "card border border-base-300 p-4",
            h2 { class: "text-xl font-bold mb-2", "{title}" }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use futures_util::FutureExt;

    use super::*;

    #[test]
    fn sample_source_loads_without_delay() {
        let source = sample_source();
        assert!(source.load().now_or_never().is_some());
        let greeting = source.loading_state().loaded().cloned();
        assert_eq!(greeting.map(|g| g.text), Some(CCStr::from("Rust 🦀")));
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_sources_end_after_the_delay() {
        let delayed = sample_delayed_source();
        let failing = sample_failing_source();
        let start = tokio::time::Instant::now();

        futures_util::future::join(delayed.load(), failing.load()).await;

        assert!(start.elapsed() >= crate::utils::seconds_to_duration(DEMO_DELAY_SECS));
        assert!(delayed.loading_state().is_loaded());
        assert_eq!(
            failing.loading_state().error().map(|e| e.to_string()),
            Some("the sample source always fails".to_owned())
        );
    }
}
