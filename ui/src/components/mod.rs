//! Shared components. The grid is the only one: a wrapping row of gradient
//! boxes.
pub mod box_grid;
