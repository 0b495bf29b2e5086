use tracing::trace;

use crate::core::tooltip_label;
use crate::dom::GraphDom;
use crate::interaction::{PointerEvent, TooltipState};

use super::GraphController;

impl<D: GraphDom> GraphController<D> {
    /// Updates the event container's tooltip from the current hit-test.
    ///
    /// A hit group with both attributes decodable and a positioned shape
    /// shows the tooltip at `bar_x - region_offset + margin`; every other
    /// outcome hides it. Only the event container's tooltip is touched.
    pub fn pointer_move(&mut self, event: PointerEvent<D::Node>) {
        let Some(binding) = self.binding_for(event.current_target) else {
            return;
        };

        let state = self
            .hit_datum(event.target)
            .and_then(|(group, datum)| {
                let bar_x = self.group_x(group)?;
                let left = bar_x - self.dom.scroll_offset(binding.scroll_region)
                    + self.config.tooltip_margin_px;
                Some(TooltipState::shown(
                    left,
                    tooltip_label(datum, self.config.date_style),
                ))
            })
            .unwrap_or_default();

        trace!(visible = state.visible, left = state.left, "tooltip update");
        self.dom.apply_tooltip(binding.tooltip_overlay, &state);
    }

    /// Hides the event container's tooltip unconditionally.
    pub fn pointer_leave(&mut self, event: PointerEvent<D::Node>) {
        let Some(binding) = self.binding_for(event.current_target) else {
            return;
        };
        self.dom
            .apply_tooltip(binding.tooltip_overlay, &TooltipState::hidden());
    }
}
