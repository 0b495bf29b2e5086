mod controller;
mod controller_config;
mod navigation;
mod tooltip_presenter;

pub use controller::{ContainerBinding, GraphController};
pub use controller_config::GraphControllerConfig;
