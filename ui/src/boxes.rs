//! Identifier generation and render state for the box grid.

use crate::error::GridError;

/// Number of boxes the grid shows.
pub const BOX_COUNT: usize = 100;

/// Prefix shared by every box identifier.
pub const BOX_PREFIX: &str = "box";

/// Builds `how_many` identifiers of the form `{prefix}{i}`, counting up from 0.
pub fn make_box_ids(prefix: &str, how_many: usize) -> Vec<String> {
    (0..how_many).map(|i| format!("{prefix}{i}")).collect()
}

/// The contents of the grid's state cell.
///
/// Starts out `Uninitialized` and moves to `Populated` exactly once, after the
/// component's first render.
#[derive(Clone, PartialEq, Debug, Default, strum::EnumIs)]
pub enum BoxGridState {
    #[default]
    Uninitialized,
    Populated(Vec<String>),
}

impl BoxGridState {
    /// The identifiers to render. Empty until populated.
    pub fn ids(&self) -> &[String] {
        match self {
            Self::Uninitialized => &[],
            Self::Populated(ids) => ids,
        }
    }

    /// Performs the one-shot `Uninitialized -> Populated` transition.
    pub fn populate(&mut self, prefix: &str, how_many: usize) -> Result<(), GridError> {
        if let Self::Populated(ids) = self {
            return Err(GridError::AlreadyPopulated { count: ids.len() });
        }
        *self = Self::Populated(make_box_ids(prefix, how_many));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_prefixed_and_ordered() {
        let ids = make_box_ids(BOX_PREFIX, BOX_COUNT);
        assert_eq!(ids.len(), 100);
        assert_eq!(ids.first().map(String::as_str), Some("box0"));
        assert_eq!(ids.last().map(String::as_str), Some("box99"));
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id, &format!("box{i}"));
        }
    }

    #[test]
    fn ids_are_distinct() {
        let ids = make_box_ids(BOX_PREFIX, BOX_COUNT);
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn zero_count_gives_no_ids() {
        assert!(make_box_ids(BOX_PREFIX, 0).is_empty());
    }

    #[test]
    fn uninitialized_state_has_no_ids() {
        let state = BoxGridState::default();
        assert!(state.is_uninitialized());
        assert!(state.ids().is_empty());
    }

    #[test]
    fn populate_runs_once() {
        let mut state = BoxGridState::default();
        state.populate(BOX_PREFIX, BOX_COUNT).unwrap();
        assert!(state.is_populated());
        let first = state.ids().to_vec();

        let err = state.populate("other", 3).unwrap_err();
        assert_eq!(err, GridError::AlreadyPopulated { count: 100 });
        assert_eq!(state.ids(), first.as_slice());
    }

    #[test]
    fn fresh_states_populate_identically() {
        let mut a = BoxGridState::default();
        let mut b = BoxGridState::default();
        a.populate(BOX_PREFIX, BOX_COUNT).unwrap();
        b.populate(BOX_PREFIX, BOX_COUNT).unwrap();
        assert_eq!(a, b);
    }
}
