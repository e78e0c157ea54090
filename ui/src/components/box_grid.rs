//! The gradient box grid.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

use crate::hooks::use_box_ids::use_box_ids;
use crate::theme::BoxStyle;
use crate::theme::FlowStyle;

/// A wrapping, centered grid of gradient boxes.
///
/// Renders an empty container on the first pass, then one box per id once
/// the ids have been generated.
#[component]
pub fn BoxGrid() -> Element {
    let state = use_box_ids();
    let ids = state.read().ids().to_vec();

    rsx! {
        BoxFlow { ids }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct BoxFlowProps {
    ids: Vec<String>,
}

/// Lays out one [`GradientBox`] per id, keyed by the id.
pub fn BoxFlow(props: BoxFlowProps) -> Element {
    let flow_css = FlowStyle::default().to_css();

    rsx! {
        div {
            class: "box-flow",
            style: "{flow_css}",
            for id in props.ids.iter() {
                GradientBox {
                    key: "{id}",
                    id: id.clone(),
                }
            }
        }
    }
}

/// A single decorative box.
///
/// `data-box-id` mirrors the `key` the parent gives it, since keys don't show
/// up in rendered html.
#[component]
pub fn GradientBox(id: String) -> Element {
    let box_css = BoxStyle::default().to_css();

    rsx! {
        div {
            class: "gradient-box",
            "data-box-id": "{id}",
            style: "{box_css}",
        }
    }
}
