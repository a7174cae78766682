use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use panelkit::{
    ControlError, ControlId, Desktop, Dock, Event, HitTestResult, MouseButton, Orientation, Point, Rect,
    ResizeConfig, ResizeRegion, ScrollBarVisibility, ScrollConfig, ScrollNotification, WHEEL_DELTA,
};

const EPSILON: f32 = 1e-6;

struct Scrolling {
    desktop: Desktop,
    surface: ControlId,
    child: ControlId,
    vbar: ControlId,
    hbar: ControlId,
}

/// 100x100 scrollable surface holding one 100x300 child, with both bars.
fn scrolling() -> Scrolling {
    let mut desktop = Desktop::new();
    let surface = desktop.create_scrollable_panel(Rect::new(0, 0, 100, 100), ScrollConfig::new());
    let child = desktop.create_control(Rect::new(0, 0, 100, 300));
    desktop.add_child(surface, child).unwrap();

    let vbar = desktop.create_scroll_bar(Rect::new(100, 0, 10, 100), Orientation::Vertical);
    let hbar = desktop.create_scroll_bar(Rect::new(0, 100, 100, 10), Orientation::Horizontal);
    desktop.attach_scroll_bar(surface, vbar).unwrap();
    desktop.attach_scroll_bar(surface, hbar).unwrap();

    Scrolling {
        desktop,
        surface,
        child,
        vbar,
        hbar,
    }
}

fn content_bounds(desktop: &Desktop, surface: ControlId) -> Rect {
    let container = desktop.scrollable(surface).unwrap().container();
    desktop.tree().get(container).unwrap().bounds
}

fn bar_visible(desktop: &Desktop, bar: ControlId) -> bool {
    desktop.tree().get(bar).unwrap().visible
}

fn wheel(target: ControlId, delta: i32) -> Event {
    Event::Wheel {
        target,
        x: 10,
        y: 10,
        delta,
    }
}

// ============================================================================
// Content proxy
// ============================================================================

#[test]
fn test_children_live_in_content_layer() {
    let s = scrolling();
    let panel = s.desktop.scrollable(s.surface).unwrap();

    assert_eq!(s.desktop.children(s.surface), &[s.child]);
    assert_eq!(s.desktop.tree().children(s.surface), &[panel.container()]);
    assert_eq!(s.desktop.tree().parent(s.child), Some(panel.container()));
}

#[test]
fn test_clear_destroys_content_children() {
    let mut s = scrolling();
    let grandchild = s.desktop.create_control(Rect::new(0, 0, 5, 5));
    s.desktop.add_child(s.child, grandchild).unwrap();

    s.desktop.clear_children(s.surface).unwrap();

    assert!(s.desktop.children(s.surface).is_empty());
    assert!(!s.desktop.tree().contains(s.child));
    assert!(!s.desktop.tree().contains(grandchild));
    let panel = s.desktop.scrollable(s.surface).unwrap();
    assert!(s.desktop.tree().contains(panel.container()));
    assert_eq!(panel.resizable().filters().len(), 1, "only the content layer");
    assert_eq!(panel.visible_percent(Orientation::Vertical), 1.0);
}

// ============================================================================
// Geometry triggers
// ============================================================================

#[test]
fn test_adding_content_updates_visible_percent_and_bars() {
    let mut s = scrolling();
    let panel = s.desktop.scrollable(s.surface).unwrap();

    assert!((panel.visible_percent(Orientation::Vertical) - 1.0 / 3.0).abs() < EPSILON);
    assert_eq!(content_bounds(&s.desktop, s.surface), Rect::new(0, 0, 100, 300));
    assert!(bar_visible(&s.desktop, s.vbar));
    assert!(!bar_visible(&s.desktop, s.hbar));

    let notifications = s.desktop.take_notifications();
    assert!(notifications.contains(&ScrollNotification::VisiblePercentChanged {
        surface: s.surface,
        orientation: Orientation::Vertical,
    }));
    assert!(s.desktop.take_notifications().is_empty());
}

#[test]
fn test_removing_content_resets_position() {
    let mut s = scrolling();
    s.desktop.set_scroll_value(s.surface, Orientation::Vertical, 1.0);
    assert_eq!(content_bounds(&s.desktop, s.surface).y, -200);

    s.desktop.remove_child(s.surface, s.child).unwrap();

    assert_eq!(content_bounds(&s.desktop, s.surface), Rect::new(0, 0, 100, 100));
    assert!(!bar_visible(&s.desktop, s.vbar));
    assert_eq!(s.desktop.tree().parent(s.child), None);
}

#[test]
fn test_child_resize_recomputes_extents() {
    let mut s = scrolling();
    assert!(s.desktop.set_bounds(s.child, Rect::new(0, 0, 100, 500)));
    let panel = s.desktop.scrollable(s.surface).unwrap();
    assert!((panel.visible_percent(Orientation::Vertical) - 0.2).abs() < EPSILON);
    assert_eq!(content_bounds(&s.desktop, s.surface).height, 500);
}

#[test]
fn test_fill_docked_content_stops_overflowing() {
    let mut s = scrolling();
    assert!(s.desktop.set_dock(s.child, Dock::Fill));
    assert!(!s.desktop.set_dock(s.child, Dock::Fill));

    let panel = s.desktop.scrollable(s.surface).unwrap();
    assert_eq!(panel.visible_percent(Orientation::Vertical), 1.0);
    assert_eq!(content_bounds(&s.desktop, s.surface).height, 100);
    assert!(!bar_visible(&s.desktop, s.vbar));
}

#[test]
fn test_viewport_resize_recomputes_extents() {
    let mut s = scrolling();
    s.desktop.set_scroll_value(s.surface, Orientation::Vertical, 0.5);

    s.desktop.set_bounds(s.surface, Rect::new(0, 0, 100, 300));

    let panel = s.desktop.scrollable(s.surface).unwrap();
    assert_eq!(panel.visible_percent(Orientation::Vertical), 1.0);
    assert_eq!(content_bounds(&s.desktop, s.surface).location(), Point::new(0, 0));
    assert!(!bar_visible(&s.desktop, s.vbar));
}

#[test]
fn test_policy_change_applies_on_relayout() {
    let mut s = scrolling();
    s.desktop
        .scrollable_mut(s.surface)
        .unwrap()
        .set_visibility(Orientation::Horizontal, ScrollBarVisibility::Always);
    s.desktop.relayout(s.surface);
    assert!(bar_visible(&s.desktop, s.hbar));
}

// ============================================================================
// Scrollbar relay
// ============================================================================

#[test]
fn test_scroll_bar_drag_moves_content() {
    let mut s = scrolling();
    s.desktop.take_notifications();

    assert!(s.desktop.drag_scroll_bar(s.vbar, 0.5));

    assert_eq!(content_bounds(&s.desktop, s.surface).y, -100);
    let panel = s.desktop.scrollable(s.surface).unwrap();
    assert_eq!(panel.scroll_value(Orientation::Vertical), 0.5);
    assert_eq!(s.desktop.scroll_bar(s.vbar).unwrap().value(), 0.5);
    assert!(s.desktop.take_notifications().is_empty());
}

#[test]
fn test_scroll_bar_drag_is_clamped() {
    let mut s = scrolling();
    s.desktop.drag_scroll_bar(s.vbar, 3.0);
    assert_eq!(s.desktop.scroll_bar(s.vbar).unwrap().value(), 1.0);
    assert_eq!(content_bounds(&s.desktop, s.surface).y, -200);
}

#[test]
fn test_programmatic_value_reaches_bar() {
    let mut s = scrolling();
    s.desktop.set_scroll_value(s.surface, Orientation::Vertical, 0.25);
    assert_eq!(s.desktop.scroll_bar(s.vbar).unwrap().value(), 0.25);
    assert_eq!(content_bounds(&s.desktop, s.surface).y, -50);
    assert!(s
        .desktop
        .take_notifications()
        .contains(&ScrollNotification::ScrollValueChanged {
            surface: s.surface,
            orientation: Orientation::Vertical,
        }));
}

#[test]
fn test_replaced_bar_is_no_longer_relayed() {
    let mut s = scrolling();
    let replacement = s
        .desktop
        .create_scroll_bar(Rect::new(100, 0, 10, 100), Orientation::Vertical);
    s.desktop.attach_scroll_bar(s.surface, replacement).unwrap();

    assert!(!s.desktop.drag_scroll_bar(s.vbar, 0.9));
    assert_eq!(content_bounds(&s.desktop, s.surface).y, 0);

    assert!(s.desktop.drag_scroll_bar(replacement, 0.5));
    assert_eq!(content_bounds(&s.desktop, s.surface).y, -100);
}

#[test]
fn test_detached_bar_is_no_longer_relayed() {
    let mut s = scrolling();
    assert_eq!(
        s.desktop.detach_scroll_bar(s.surface, Orientation::Vertical),
        Some(s.vbar)
    );
    assert!(!s.desktop.drag_scroll_bar(s.vbar, 0.5));
}

#[test]
fn test_attach_rejects_non_scroll_bar() {
    let mut s = scrolling();
    assert_eq!(
        s.desktop.attach_scroll_bar(s.surface, s.child),
        Err(ControlError::NotAScrollBar(s.child))
    );
    assert_eq!(
        s.desktop.attach_scroll_bar(s.child, s.vbar),
        Err(ControlError::UnknownControl(s.child))
    );
}

// ============================================================================
// Wheel
// ============================================================================

#[test]
fn test_wheel_through_child_scrolls_surface() {
    let mut s = scrolling();
    s.desktop.drag_scroll_bar(s.vbar, 0.5);
    s.desktop.take_notifications();

    assert!(s.desktop.dispatch(wheel(s.child, -WHEEL_DELTA)));

    assert_eq!(content_bounds(&s.desktop, s.surface).y, -160);
    let value = s.desktop.scroll_bar(s.vbar).unwrap().value();
    assert!((value - 0.8).abs() < EPSILON);
    assert_eq!(s.desktop.take_notifications().len(), 2);
}

#[test]
fn test_wheel_outside_scrollable_is_ignored() {
    let mut desktop = Desktop::new();
    let plain = desktop.create_control(Rect::new(0, 0, 50, 50));
    assert!(!desktop.dispatch(wheel(plain, -WHEEL_DELTA)));
}

#[test]
fn test_crossterm_wheel_scrolls_control_under_cursor() {
    let mut s = scrolling();
    let event = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(s.desktop.control_at(Point::new(10, 10)), Some(s.child));
    assert!(s.desktop.dispatch_crossterm(event));
    assert_eq!(content_bounds(&s.desktop, s.surface).y, -60);
}

#[test]
fn test_crossterm_conversion() {
    let mut desktop = Desktop::new();
    let id = desktop.create_control(Rect::default());
    let event = |kind| MouseEvent {
        kind,
        column: 3,
        row: 4,
        modifiers: KeyModifiers::NONE,
    };

    assert_eq!(
        Event::from_crossterm(event(MouseEventKind::ScrollUp), id),
        Some(Event::Wheel {
            target: id,
            x: 3,
            y: 4,
            delta: WHEEL_DELTA,
        })
    );
    assert_eq!(
        Event::from_crossterm(
            event(MouseEventKind::Down(crossterm::event::MouseButton::Left)),
            id
        ),
        Some(Event::MouseDown {
            target: id,
            x: 3,
            y: 4,
            button: MouseButton::Left,
        })
    );
    assert_eq!(Event::from_crossterm(event(MouseEventKind::ScrollLeft), id), None);
}

// ============================================================================
// Border probes
// ============================================================================

fn resizable_with_chain(depth: usize) -> (Desktop, ControlId, Vec<ControlId>) {
    let mut desktop = Desktop::new();
    let surface = desktop.create_resizable_panel(
        Rect::new(50, 50, 200, 150),
        ResizeConfig::new().all_edges().thickness(5),
    );
    let mut ids = Vec::new();
    let mut parent = surface;
    for _ in 0..depth {
        let child = desktop.create_control(Rect::new(0, 0, 100, 100));
        desktop.add_child(parent, child).unwrap();
        ids.push(child);
        parent = child;
    }
    (desktop, surface, ids)
}

#[test]
fn test_probe_through_deep_descendant() {
    let (desktop, _, ids) = resizable_with_chain(3);
    let deepest = *ids.last().unwrap();

    assert_eq!(
        desktop.hit_test(deepest, Point::new(52, 52)),
        HitTestResult::Border(ResizeRegion::TopLeft)
    );
    assert_eq!(
        desktop.hit_test(deepest, Point::new(52, 125)),
        HitTestResult::Border(ResizeRegion::Left)
    );
    assert_eq!(desktop.hit_test(deepest, Point::new(150, 125)), HitTestResult::Client);
}

#[test]
fn test_subtree_registered_and_removed() {
    let (mut desktop, surface, ids) = resizable_with_chain(4);
    assert_eq!(desktop.resizable(surface).unwrap().filters().len(), 4);

    desktop.remove_child(surface, ids[0]).unwrap();
    assert!(desktop.resizable(surface).unwrap().filters().is_empty());
    assert_eq!(desktop.hit_test(ids[3], Point::new(52, 52)), HitTestResult::Client);
}

#[test]
fn test_existing_subtree_registered_on_add() {
    let mut desktop = Desktop::new();
    let surface = desktop.create_resizable_panel(Rect::new(0, 0, 200, 150), ResizeConfig::new());
    let a = desktop.create_control(Rect::default());
    let b = desktop.create_control(Rect::default());
    let c = desktop.create_control(Rect::default());
    desktop.add_child(a, b).unwrap();
    desktop.add_child(b, c).unwrap();

    desktop.add_child(surface, a).unwrap();

    let filters = desktop.resizable(surface).unwrap().filters();
    assert!(filters.is_tracked(a) && filters.is_tracked(b) && filters.is_tracked(c));
}

#[test]
fn test_thickness_change_reaches_probe() {
    let (mut desktop, surface, ids) = resizable_with_chain(2);
    assert_eq!(desktop.hit_test(ids[1], Point::new(60, 100)), HitTestResult::Client);

    desktop.resizable_mut(surface).unwrap().set_thickness(12);
    assert_eq!(
        desktop.hit_test(ids[1], Point::new(60, 100)),
        HitTestResult::Border(ResizeRegion::Left)
    );
}

#[test]
fn test_scrollable_surface_is_resizable() {
    let mut desktop = Desktop::new();
    let surface = desktop.create_scrollable_panel(
        Rect::new(0, 0, 100, 100),
        ScrollConfig::new().resize(ResizeConfig::new().all_edges()),
    );
    let child = desktop.create_control(Rect::new(0, 0, 100, 300));
    desktop.add_child(surface, child).unwrap();

    assert_eq!(
        desktop.hit_test(child, Point::new(98, 98)),
        HitTestResult::Border(ResizeRegion::BottomRight)
    );
}

#[test]
fn test_add_to_unknown_parent_fails() {
    let mut desktop = Desktop::new();
    let gone = desktop.create_control(Rect::default());
    let child = desktop.create_control(Rect::default());
    desktop.dispose(gone);
    assert_eq!(
        desktop.add_child(gone, child),
        Err(ControlError::UnknownControl(gone))
    );
}

// ============================================================================
// Form drag
// ============================================================================

#[test]
fn test_form_drag_moves_window() {
    let mut desktop = Desktop::new();
    let window = desktop.create_control(Rect::new(100, 100, 300, 200));
    let handle = desktop.create_control(Rect::new(0, 0, 300, 20));
    desktop.add_child(window, handle).unwrap();
    let drag = desktop.add_form_drag(handle);

    assert!(desktop.dispatch(Event::MouseDown {
        target: handle,
        x: 110,
        y: 105,
        button: MouseButton::Left,
    }));
    assert!(desktop.form_drag(drag).unwrap().is_dragging());

    assert!(desktop.dispatch(Event::MouseMove {
        target: handle,
        x: 150,
        y: 125,
    }));
    assert_eq!(
        desktop.tree().get(window).unwrap().bounds,
        Rect::new(140, 120, 300, 200)
    );

    assert!(desktop.dispatch(Event::MouseUp {
        target: handle,
        x: 150,
        y: 125,
        button: MouseButton::Left,
    }));
    assert!(!desktop.dispatch(Event::MouseMove {
        target: handle,
        x: 10,
        y: 10,
    }));
    assert_eq!(desktop.tree().get(window).unwrap().bounds.location(), Point::new(140, 120));
}

#[test]
fn test_form_drag_ignores_other_controls() {
    let mut desktop = Desktop::new();
    let window = desktop.create_control(Rect::new(0, 0, 300, 200));
    let handle = desktop.create_control(Rect::new(0, 0, 300, 20));
    let body = desktop.create_control(Rect::new(0, 20, 300, 180));
    desktop.add_child(window, handle).unwrap();
    desktop.add_child(window, body).unwrap();
    desktop.add_form_drag(handle);

    assert!(!desktop.dispatch(Event::MouseDown {
        target: body,
        x: 5,
        y: 50,
        button: MouseButton::Left,
    }));
}
