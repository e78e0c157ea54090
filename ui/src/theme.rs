//! Style tokens for the box grid.
//! Every box shares one [`BoxStyle`]; the container uses one [`FlowStyle`].

use std::fmt;

// =============================================================================
// Tokens
// =============================================================================
pub const BOX_PADDING: &str = "80px";
pub const BOX_RADIUS: &str = "0.5rem"; // "lg"
pub const GRADIENT_FROM: &str = "red";
pub const GRADIENT_TO: &str = "orange";
pub const FLOW_GAP: &str = "1rem"; // spacing scale 4

// =============================================================================
// Box
// =============================================================================

/// A two-stop, top-to-bottom linear gradient.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LinearGradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}, {})", self.from, self.to)
    }
}

/// The visual attributes of a single box.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoxStyle {
    pub padding: &'static str,
    pub gradient: LinearGradient,
    pub border_radius: &'static str,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            padding: BOX_PADDING,
            gradient: LinearGradient {
                from: GRADIENT_FROM,
                to: GRADIENT_TO,
            },
            border_radius: BOX_RADIUS,
        }
    }
}

impl BoxStyle {
    /// Inline CSS for the `style` attribute.
    pub fn to_css(&self) -> String {
        format!(
            "padding: {}; background-image: {}; border-radius: {};",
            self.padding, self.gradient, self.border_radius
        )
    }
}

// =============================================================================
// Container
// =============================================================================

/// Row flow that wraps onto new lines and centers each line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FlowStyle {
    pub gap: &'static str,
}

impl Default for FlowStyle {
    fn default() -> Self {
        Self { gap: FLOW_GAP }
    }
}

impl FlowStyle {
    pub fn to_css(&self) -> String {
        format!(
            "display: flex; flex-flow: row wrap; justify-content: center; gap: {};",
            self.gap
        )
    }
}
