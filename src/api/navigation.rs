use tracing::debug;

use crate::core::{parse_iso_date, with_range_params};
use crate::dom::{DATA_DATE_ATTR, GraphDom};
use crate::error::GraphResult;
use crate::interaction::PointerEvent;

use super::GraphController;

impl<D: GraphDom> GraphController<D> {
    /// Navigates to the clicked bar's date range, with `from` and `to` both
    /// set to the bar's date.
    ///
    /// Clicks that resolve to no bar, or to a bar without a parseable date,
    /// are a no-op. Disabled entirely by `navigation_enabled = false`.
    pub fn click(&mut self, event: PointerEvent<D::Node>) -> GraphResult<()> {
        if !self.config.navigation_enabled {
            return Ok(());
        }
        let Some(group) = self.hit_group(event.target) else {
            return Ok(());
        };
        let Some(date) = self
            .dom
            .attribute(group, DATA_DATE_ATTR)
            .and_then(|raw| parse_iso_date(&raw))
        else {
            return Ok(());
        };

        let url = with_range_params(self.dom.current_url(), date)?;
        debug!(%url, "navigating to selected date range");
        self.dom.navigate(url);
        Ok(())
    }
}
