use std::fmt::Debug;

use smallvec::SmallVec;
use tracing::debug;

use crate::dom::GraphDom;

/// Keeps every registered scroll region at the same horizontal offset.
///
/// The region set is fixed at construction; there are no hidden global
/// lookups. Mirroring excludes the origin region and skips equal-value
/// writes, so programmatic scroll assignment cannot feed back into itself.
#[derive(Debug, Clone)]
pub struct ScrollSynchronizer<N> {
    regions: SmallVec<[N; 4]>,
}

impl<N: Copy + Eq + Debug> ScrollSynchronizer<N> {
    #[must_use]
    pub fn new(regions: impl IntoIterator<Item = N>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn regions(&self) -> &[N] {
        &self.regions
    }

    /// Scrolls every region to its trailing edge (most recent data visible).
    pub fn scroll_to_end<D>(&self, dom: &mut D)
    where
        D: GraphDom<Node = N>,
    {
        for &region in &self.regions {
            let max = dom.max_scroll_offset(region);
            dom.set_scroll_offset(region, max);
        }
    }

    /// Mirrors `origin`'s current offset onto every other registered region.
    ///
    /// Repeated invocations with an unchanged origin offset are idempotent.
    pub fn mirror_from<D>(&self, dom: &mut D, origin: N)
    where
        D: GraphDom<Node = N>,
    {
        let offset = dom.scroll_offset(origin);
        debug!(?origin, offset, "mirroring scroll offset");
        for &region in &self.regions {
            if region == origin {
                continue;
            }
            if dom.scroll_offset(region) != offset {
                dom.set_scroll_offset(region, offset);
            }
        }
    }
}
