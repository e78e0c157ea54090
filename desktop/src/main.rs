use dioxus::prelude::*;

fn main() {
    let prefs = ui::AppPrefs::from_env();
    let level = prefs.as_ref().map(|p| p.log_level()).unwrap_or_default();

    dioxus_logger::init(level.into()).expect("failed to init logger");
    if let Err(e) = prefs {
        dioxus_logger::tracing::warn!("{}, using defaults", e);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
