//! In-memory document tree.
//!
//! `MemoryDom` is the headless backend: hosts without a live document (and
//! the test suites) build the chart structure here and drive the controller
//! against it. It additionally records scroll writes and navigations so
//! feedback-loop behavior stays observable.

use indexmap::IndexMap;

use crate::dom::{GraphDom, NodeRole};
use crate::interaction::TooltipState;

/// Handle to a node inside a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Scroll geometry of a scroll region node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub viewport_width: f64,
    pub content_width: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(viewport_width: f64, content_width: f64) -> Self {
        Self {
            viewport_width,
            content_width,
        }
    }

    #[must_use]
    pub fn max_offset(self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollState {
    metrics: ScrollMetrics,
    offset: f64,
    writes: u64,
}

#[derive(Debug, Clone)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    role: Option<NodeRole>,
    attributes: IndexMap<String, String>,
    scroll: Option<ScrollState>,
    tooltip: Option<TooltipState>,
}

#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    url: String,
    navigations: Vec<String>,
}

impl MemoryDom {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            url: url.into(),
            navigations: Vec::new(),
        }
    }

    /// Appends a node under `parent` (or as a root when `None`).
    ///
    /// Scroll regions start with empty geometry; tooltip overlays start
    /// hidden.
    pub fn add_node(&mut self, parent: Option<NodeId>, role: Option<NodeRole>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent,
            children: Vec::new(),
            role,
            attributes: IndexMap::new(),
            scroll: (role == Some(NodeRole::ScrollRegion)).then(|| ScrollState {
                metrics: ScrollMetrics::new(0.0, 0.0),
                offset: 0.0,
                writes: 0,
            }),
            tooltip: (role == Some(NodeRole::TooltipOverlay)).then(TooltipState::default),
        });
        if let Some(data) = parent.and_then(|parent| self.nodes.get_mut(parent.0)) {
            data.children.push(id);
        }
        id
    }

    pub fn set_attribute(&mut self, node: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(data) = self.nodes.get_mut(node.0) {
            data.attributes.insert(name.into(), value.into());
        }
    }

    /// Sets a scroll region's geometry; ignored for other roles.
    pub fn set_scroll_metrics(&mut self, region: NodeId, metrics: ScrollMetrics) {
        if let Some(scroll) = self.nodes.get_mut(region.0).and_then(|data| data.scroll.as_mut()) {
            scroll.metrics = metrics;
            scroll.offset = scroll.offset.clamp(0.0, metrics.max_offset());
        }
    }

    /// Last tooltip state applied to `overlay`, hidden until first applied.
    #[must_use]
    pub fn tooltip_state(&self, overlay: NodeId) -> Option<&TooltipState> {
        self.nodes.get(overlay.0).and_then(|data| data.tooltip.as_ref())
    }

    /// Number of scroll offset assignments `region` has received.
    #[must_use]
    pub fn scroll_write_count(&self, region: NodeId) -> u64 {
        self.nodes
            .get(region.0)
            .and_then(|data| data.scroll.as_ref())
            .map_or(0, |scroll| scroll.writes)
    }

    /// Full navigations performed, oldest first.
    #[must_use]
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }
}

impl GraphDom for MemoryDom {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|data| data.parent)
    }

    fn role(&self, node: NodeId) -> Option<NodeRole> {
        self.nodes.get(node.0).and_then(|data| data.role)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes
            .get(node.0)
            .and_then(|data| data.attributes.get(name).cloned())
    }

    fn find_descendant(&self, root: NodeId, role: NodeRole) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self
            .nodes
            .get(root.0)
            .map(|data| data.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(node) = stack.pop() {
            if self.role(node) == Some(role) {
                return Some(node);
            }
            if let Some(data) = self.nodes.get(node.0) {
                stack.extend(data.children.iter().rev().copied());
            }
        }
        None
    }

    fn scroll_offset(&self, region: NodeId) -> f64 {
        self.nodes
            .get(region.0)
            .and_then(|data| data.scroll.as_ref())
            .map_or(0.0, |scroll| scroll.offset)
    }

    fn max_scroll_offset(&self, region: NodeId) -> f64 {
        self.nodes
            .get(region.0)
            .and_then(|data| data.scroll.as_ref())
            .map_or(0.0, |scroll| scroll.metrics.max_offset())
    }

    fn set_scroll_offset(&mut self, region: NodeId, offset: f64) {
        if let Some(scroll) = self.nodes.get_mut(region.0).and_then(|data| data.scroll.as_mut()) {
            scroll.offset = offset.clamp(0.0, scroll.metrics.max_offset());
            scroll.writes += 1;
        }
    }

    fn apply_tooltip(&mut self, overlay: NodeId, state: &TooltipState) {
        if let Some(tooltip) = self.nodes.get_mut(overlay.0).and_then(|data| data.tooltip.as_mut()) {
            *tooltip = state.clone();
        }
    }

    fn current_url(&self) -> &str {
        &self.url
    }

    fn navigate(&mut self, url: String) {
        self.navigations.push(url);
    }
}
