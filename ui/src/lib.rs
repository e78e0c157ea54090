// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod boxes;
mod components;
pub mod error;
pub mod hooks;
pub mod prefs;
mod theme;

pub use boxes::BoxGridState;
pub use boxes::BOX_COUNT;
pub use boxes::BOX_PREFIX;
pub use components::box_grid::BoxGrid;
pub use prefs::AppPrefs;

const PAGE_CSS: &str = r#"
    body {
        margin: 0;
        padding: 1rem;
    }
"#;

/// The root component: page metadata plus the box grid.
#[component]
pub fn App() -> Element {
    use_hook(|| dioxus_logger::tracing::info!("app mounted"));

    rsx! {
        document::Title { "Boxes" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{PAGE_CSS}"
        }
        main {
            BoxGrid {}
        }
    }
}
