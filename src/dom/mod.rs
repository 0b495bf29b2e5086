mod memory;

pub use memory::{MemoryDom, NodeId, ScrollMetrics};

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::interaction::TooltipState;

/// Group value attribute (numeric text).
pub const DATA_VALUE_ATTR: &str = "data-v";
/// Group date attribute (ISO-8601 calendar date).
pub const DATA_DATE_ATTR: &str = "data-d";
/// Horizontal position attribute on a group's shape element.
pub const SHAPE_X_ATTR: &str = "x";

/// Structural role of a document node, as produced by the upstream renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// Outer wrapper owning one scroll region and one tooltip overlay.
    ChartContainer,
    /// Horizontally scrollable element; its offset is the synchronization key.
    ScrollRegion,
    /// Surface receiving pointer move/leave/click events.
    ChartSurface,
    /// One bar's grouping, carrying `data-v` and `data-d`.
    BarGroup,
    /// Geometric shape inside a group, exposing `x`.
    Shape,
    /// Floating overlay showing the hovered bar's date and value.
    TooltipOverlay,
}

/// Contract implemented by any host document backend.
///
/// The controller never touches a concrete rendering backend; everything it
/// needs from the host document flows through this trait. Implementations
/// own the real element tree (a browser bridge, a widget toolkit, or the
/// in-memory [`MemoryDom`]); the controller only reads structure and
/// attributes and mutates tooltip state and scroll offsets.
pub trait GraphDom {
    type Node: Copy + Eq + Hash + Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn role(&self, node: Self::Node) -> Option<NodeRole>;
    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;
    /// First descendant of `root` with `role`, in document order.
    fn find_descendant(&self, root: Self::Node, role: NodeRole) -> Option<Self::Node>;

    fn scroll_offset(&self, region: Self::Node) -> f64;
    /// Maximum scrollable extent: content width minus viewport width, >= 0.
    fn max_scroll_offset(&self, region: Self::Node) -> f64;
    /// Assigns `offset`; implementations clamp to `[0, max_scroll_offset]`.
    fn set_scroll_offset(&mut self, region: Self::Node, offset: f64);

    fn apply_tooltip(&mut self, overlay: Self::Node, state: &TooltipState);

    fn current_url(&self) -> &str;
    /// Performs a full page navigation to `url`.
    fn navigate(&mut self, url: String);
}

/// Nearest ancestor of `start` (including `start` itself) with `role`.
#[must_use]
pub fn closest<D: GraphDom>(dom: &D, start: D::Node, role: NodeRole) -> Option<D::Node> {
    let mut node = Some(start);
    while let Some(current) = node {
        if dom.role(current) == Some(role) {
            return Some(current);
        }
        node = dom.parent(current);
    }
    None
}
