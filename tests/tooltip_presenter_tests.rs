use approx::assert_abs_diff_eq;
use graph_interact_rs::api::{GraphController, GraphControllerConfig};
use graph_interact_rs::core::DateStyle;
use graph_interact_rs::dom::{GraphDom, MemoryDom, NodeId, NodeRole, ScrollMetrics};
use graph_interact_rs::interaction::PointerEvent;

struct Chart {
    container: NodeId,
    region: NodeId,
    surface: NodeId,
    overlay: NodeId,
}

fn add_chart(dom: &mut MemoryDom) -> Chart {
    let container = dom.add_node(None, Some(NodeRole::ChartContainer));
    let region = dom.add_node(Some(container), Some(NodeRole::ScrollRegion));
    dom.set_scroll_metrics(region, ScrollMetrics::new(100.0, 500.0));
    let surface = dom.add_node(Some(region), Some(NodeRole::ChartSurface));
    let overlay = dom.add_node(Some(container), Some(NodeRole::TooltipOverlay));
    Chart {
        container,
        region,
        surface,
        overlay,
    }
}

fn add_bar(dom: &mut MemoryDom, surface: NodeId, date: &str, value: &str, x: f64) -> NodeId {
    let group = dom.add_node(Some(surface), Some(NodeRole::BarGroup));
    dom.set_attribute(group, "data-d", date);
    dom.set_attribute(group, "data-v", value);
    let shape = dom.add_node(Some(group), Some(NodeRole::Shape));
    dom.set_attribute(shape, "x", x.to_string());
    shape
}

#[test]
fn hover_shows_formatted_label_at_scroll_relative_offset() {
    let mut dom = MemoryDom::new("https://host/stats");
    let chart = add_chart(&mut dom);
    let shape = add_bar(&mut dom, chart.surface, "2024-03-01", "42", 120.0);

    let mut controller =
        GraphController::attach(dom, GraphControllerConfig::default(), [chart.container])
            .expect("attach");
    controller.dom_mut().set_scroll_offset(chart.region, 250.0);

    controller.pointer_move(PointerEvent::new(shape, chart.surface));

    let tooltip = controller
        .dom()
        .tooltip_state(chart.overlay)
        .expect("overlay state");
    assert!(tooltip.visible);
    assert_eq!(tooltip.text, "Mar 1: 42");
    // 120 - 250 + 10
    assert_abs_diff_eq!(tooltip.left, -120.0, epsilon = 1e-9);
}

#[test]
fn literal_date_style_and_wider_margin_are_honored() {
    let mut dom = MemoryDom::new("https://host/stats");
    let chart = add_chart(&mut dom);
    let shape = add_bar(&mut dom, chart.surface, "2024-03-01", "42", 120.0);

    let config = GraphControllerConfig {
        tooltip_margin_px: 30.0,
        date_style: DateStyle::Iso,
        ..GraphControllerConfig::default()
    };
    let mut controller = GraphController::attach(dom, config, [chart.container]).expect("attach");
    controller.dom_mut().set_scroll_offset(chart.region, 250.0);

    controller.pointer_move(PointerEvent::new(shape, chart.surface));

    let tooltip = controller
        .dom()
        .tooltip_state(chart.overlay)
        .expect("overlay state");
    assert_eq!(tooltip.text, "2024-03-01: 42");
    assert_abs_diff_eq!(tooltip.left, -100.0, epsilon = 1e-9);
}

#[test]
fn missing_value_attribute_hides_a_previously_shown_tooltip() {
    let mut dom = MemoryDom::new("https://host/stats");
    let chart = add_chart(&mut dom);
    let good = add_bar(&mut dom, chart.surface, "2024-03-01", "42", 120.0);
    let bare_group = dom.add_node(Some(chart.surface), Some(NodeRole::BarGroup));
    dom.set_attribute(bare_group, "data-d", "2024-03-02");
    let bare_shape = dom.add_node(Some(bare_group), Some(NodeRole::Shape));
    dom.set_attribute(bare_shape, "x", "140");

    let mut controller =
        GraphController::attach(dom, GraphControllerConfig::default(), [chart.container])
            .expect("attach");

    controller.pointer_move(PointerEvent::new(good, chart.surface));
    assert!(
        controller
            .dom()
            .tooltip_state(chart.overlay)
            .expect("overlay state")
            .visible
    );

    controller.pointer_move(PointerEvent::new(bare_shape, chart.surface));
    assert!(
        !controller
            .dom()
            .tooltip_state(chart.overlay)
            .expect("overlay state")
            .visible
    );
}

#[test]
fn malformed_date_attribute_hides_the_tooltip() {
    let mut dom = MemoryDom::new("https://host/stats");
    let chart = add_chart(&mut dom);
    let shape = add_bar(&mut dom, chart.surface, "yesterday", "42", 120.0);

    let mut controller =
        GraphController::attach(dom, GraphControllerConfig::default(), [chart.container])
            .expect("attach");

    controller.pointer_move(PointerEvent::new(shape, chart.surface));
    assert!(
        !controller
            .dom()
            .tooltip_state(chart.overlay)
            .expect("overlay state")
            .visible
    );
}

#[test]
fn group_without_a_positioned_shape_hides_the_tooltip() {
    let mut dom = MemoryDom::new("https://host/stats");
    let chart = add_chart(&mut dom);
    let group = dom.add_node(Some(chart.surface), Some(NodeRole::BarGroup));
    dom.set_attribute(group, "data-d", "2024-03-01");
    dom.set_attribute(group, "data-v", "42");
    // Shape present but without an `x` attribute.
    let shape = dom.add_node(Some(group), Some(NodeRole::Shape));

    let mut controller =
        GraphController::attach(dom, GraphControllerConfig::default(), [chart.container])
            .expect("attach");

    controller.pointer_move(PointerEvent::new(shape, chart.surface));
    assert!(
        !controller
            .dom()
            .tooltip_state(chart.overlay)
            .expect("overlay state")
            .visible
    );
}

#[test]
fn pointer_leave_hides_unconditionally() {
    let mut dom = MemoryDom::new("https://host/stats");
    let chart = add_chart(&mut dom);
    let shape = add_bar(&mut dom, chart.surface, "2024-03-01", "42", 120.0);

    let mut controller =
        GraphController::attach(dom, GraphControllerConfig::default(), [chart.container])
            .expect("attach");

    controller.pointer_move(PointerEvent::new(shape, chart.surface));
    assert!(
        controller
            .dom()
            .tooltip_state(chart.overlay)
            .expect("overlay state")
            .visible
    );

    controller.pointer_leave(PointerEvent::new(chart.surface, chart.surface));
    let tooltip = controller
        .dom()
        .tooltip_state(chart.overlay)
        .expect("overlay state");
    assert!(!tooltip.visible);
    assert!(tooltip.text.is_empty());
}

#[test]
fn hover_touches_only_the_event_containers_tooltip() {
    let mut dom = MemoryDom::new("https://host/stats");
    let first = add_chart(&mut dom);
    let second = add_chart(&mut dom);
    let first_shape = add_bar(&mut dom, first.surface, "2024-03-01", "42", 120.0);
    let second_shape = add_bar(&mut dom, second.surface, "2024-03-02", "7", 80.0);

    let mut controller = GraphController::attach(
        dom,
        GraphControllerConfig::default(),
        [first.container, second.container],
    )
    .expect("attach");

    controller.pointer_move(PointerEvent::new(second_shape, second.surface));
    controller.pointer_move(PointerEvent::new(first_shape, first.surface));
    controller.pointer_leave(PointerEvent::new(first.surface, first.surface));

    assert!(
        !controller
            .dom()
            .tooltip_state(first.overlay)
            .expect("overlay state")
            .visible
    );
    // The sibling container's tooltip keeps its own state.
    assert!(
        controller
            .dom()
            .tooltip_state(second.overlay)
            .expect("overlay state")
            .visible
    );
}
