use dioxus::prelude::*;

use crate::boxes::BoxGridState;
use crate::boxes::BOX_COUNT;
use crate::boxes::BOX_PREFIX;

/// Holds the grid's identifiers for the lifetime of the calling component.
///
/// The first render sees an empty state. Population happens in an effect
/// after that render, and only once: the effect reads nothing reactive, and
/// `populate` refuses a second transition.
pub fn use_box_ids() -> Signal<BoxGridState> {
    let mut state = use_signal(BoxGridState::default);

    use_effect(move || {
        match state.write().populate(BOX_PREFIX, BOX_COUNT) {
            Ok(()) => dioxus_logger::tracing::info!("box grid populated with {} ids", BOX_COUNT),
            Err(e) => dioxus_logger::tracing::debug!("{}", e),
        }
    });

    state
}
