//! graph-interact-rs: interaction controller for SVG bar-chart graphs.
//!
//! This crate provides the pointer-tracking core behind hover tooltips,
//! lockstep scroll synchronization across sibling chart containers, and
//! click-to-navigate date-range selection. Host documents plug in through
//! the [`dom::GraphDom`] seam; an in-memory backend ships for headless use.

pub mod api;
pub mod core;
pub mod dom;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{GraphController, GraphControllerConfig};
pub use error::{GraphError, GraphResult};
