use indexmap::IndexMap;
use tracing::debug;

use crate::dom::{GraphDom, NodeRole, closest};
use crate::error::{GraphError, GraphResult};
use crate::interaction::ScrollSynchronizer;

use super::GraphControllerConfig;

/// Per-container references resolved once at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerBinding<N> {
    pub scroll_region: N,
    pub tooltip_overlay: N,
}

/// Main orchestration facade consumed by host applications.
///
/// `GraphController` wires hit-testing, tooltip presentation, scroll
/// mirroring, and click navigation over a host document. It never creates
/// or destroys document structure; the upstream renderer owns the tree.
pub struct GraphController<D: GraphDom> {
    pub(super) dom: D,
    pub(super) config: GraphControllerConfig,
    pub(super) bindings: IndexMap<D::Node, ContainerBinding<D::Node>>,
    pub(super) scroll_sync: ScrollSynchronizer<D::Node>,
}

impl<D: GraphDom> GraphController<D> {
    /// Binds the controller to `containers` and applies the initial scroll
    /// policy.
    ///
    /// Containers register in iteration order. Each must own one scroll
    /// region and one tooltip overlay.
    pub fn attach(
        dom: D,
        config: GraphControllerConfig,
        containers: impl IntoIterator<Item = D::Node>,
    ) -> GraphResult<Self> {
        let config = config.validate()?;

        let mut bindings = IndexMap::new();
        for container in containers {
            let scroll_region = dom
                .find_descendant(container, NodeRole::ScrollRegion)
                .ok_or(GraphError::MissingStructure {
                    role: "scroll region",
                })?;
            let tooltip_overlay = dom
                .find_descendant(container, NodeRole::TooltipOverlay)
                .ok_or(GraphError::MissingStructure {
                    role: "tooltip overlay",
                })?;
            bindings.insert(
                container,
                ContainerBinding {
                    scroll_region,
                    tooltip_overlay,
                },
            );
        }

        let scroll_sync =
            ScrollSynchronizer::new(bindings.values().map(|binding| binding.scroll_region));
        debug!(containers = bindings.len(), "graph controller attached");

        let mut controller = Self {
            dom,
            config,
            bindings,
            scroll_sync,
        };
        if controller.config.scroll_to_end_on_attach {
            controller.scroll_sync.scroll_to_end(&mut controller.dom);
        }
        Ok(controller)
    }

    /// Mirrors `origin`'s current offset onto every other registered region.
    pub fn scroll(&mut self, origin: D::Node) {
        self.scroll_sync.mirror_from(&mut self.dom, origin);
    }

    #[must_use]
    pub fn config(&self) -> GraphControllerConfig {
        self.config
    }

    /// Registered scroll regions, in container registration order.
    #[must_use]
    pub fn scroll_regions(&self) -> &[D::Node] {
        self.scroll_sync.regions()
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Mutable document access for host-driven changes (native scrolling,
    /// attribute updates) that happen outside the controller.
    #[must_use]
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    #[must_use]
    pub fn into_dom(self) -> D {
        self.dom
    }

    /// Binding of the container enclosing `node`, if that container was
    /// registered at attach time.
    pub(super) fn binding_for(&self, node: D::Node) -> Option<ContainerBinding<D::Node>> {
        let container = closest(&self.dom, node, NodeRole::ChartContainer)?;
        self.bindings.get(&container).copied()
    }
}
