pub mod scroll_sync;

pub use scroll_sync::ScrollSynchronizer;

use serde::{Deserialize, Serialize};

/// Visual state of one container's tooltip overlay.
///
/// The default state is hidden with empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    /// Horizontal offset from the container's left edge, in pixels.
    pub left: f64,
    pub text: String,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            left: 0.0,
            text: String::new(),
        }
    }
}

impl TooltipState {
    #[must_use]
    pub fn shown(left: f64, text: String) -> Self {
        Self {
            visible: true,
            left,
            text,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// One pointer event as dispatched by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent<N> {
    /// Innermost element under the pointer.
    pub target: N,
    /// The chart surface the listener is attached to.
    pub current_target: N,
}

impl<N> PointerEvent<N> {
    #[must_use]
    pub fn new(target: N, current_target: N) -> Self {
        Self {
            target,
            current_target,
        }
    }
}
