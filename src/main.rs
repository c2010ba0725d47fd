#![windows_subsystem = "windows"]
use async_content_view::{demo::DemoView, prelude::*};

static TITLE: &'static str = "AsyncContentView Demo";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        div { id: "app", class: "text-base", DemoView {} }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting demo");
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};
        LaunchBuilder::desktop()
            .with_cfg(
                Config::new().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_title(TITLE)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(480, 640))
                        .with_resizable(true),
                ),
            )
            .launch(App);
    }
    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}
