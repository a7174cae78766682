use std::fs::File;

use panelkit::{
    Desktop, Event, HitTestResult, Orientation, Point, Rect, ResizeConfig, ScrollBarVisibility,
    ScrollConfig, WHEEL_DELTA,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("panelkit-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut desktop = Desktop::new();

    let window = desktop.create_resizable_panel(
        Rect::new(50, 40, 400, 300),
        ResizeConfig::new().all_edges().thickness(6),
    );
    let title_bar = desktop.create_control(Rect::new(0, 0, 400, 24));
    desktop.add_child(window, title_bar)?;
    desktop.add_form_drag(title_bar);

    let list = desktop.create_scrollable_panel(
        Rect::new(10, 30, 200, 150),
        ScrollConfig::new()
            .scroll_speed(0.5)
            .show_horizontal(ScrollBarVisibility::Never),
    );
    desktop.add_child(window, list)?;

    let vbar = desktop.create_scroll_bar(Rect::new(210, 30, 16, 150), Orientation::Vertical);
    desktop.add_child(window, vbar)?;
    desktop.attach_scroll_bar(list, vbar)?;

    for row in 0..12 {
        let item = desktop.create_control(Rect::new(0, row * 40, 180, 40));
        desktop.add_child(list, item)?;
    }

    if let Some(panel) = desktop.scrollable(list) {
        println!(
            "content {:?}, vertical visible {:.2}",
            panel.geometry().content_size(),
            panel.visible_percent(Orientation::Vertical)
        );
    }

    // One notch down over the first row
    let first_row = desktop.children(list).first().copied();
    if let Some(row) = first_row {
        desktop.dispatch(Event::Wheel {
            target: row,
            x: 70,
            y: 80,
            delta: -WHEEL_DELTA,
        });
    }
    report(&desktop, list, vbar);

    desktop.drag_scroll_bar(vbar, 1.0);
    report(&desktop, list, vbar);

    // Probe the bottom-right corner of the window through a deep child
    let probe_target = first_row.unwrap_or(list);
    match desktop.hit_test(probe_target, Point::new(447, 337)) {
        HitTestResult::Border(region) => println!("probe: {region:?} (code {})", region.code()),
        HitTestResult::Client => println!("probe: client"),
    }

    // Drag the window by its title bar
    desktop.dispatch(Event::MouseDown {
        target: title_bar,
        x: 60,
        y: 45,
        button: panelkit::MouseButton::Left,
    });
    desktop.dispatch(Event::MouseMove {
        target: title_bar,
        x: 160,
        y: 85,
    });
    desktop.dispatch(Event::MouseUp {
        target: title_bar,
        x: 160,
        y: 85,
        button: panelkit::MouseButton::Left,
    });
    if let Some(control) = desktop.tree().get(window) {
        println!("window moved to {:?}", control.bounds.location());
    }

    for notification in desktop.take_notifications() {
        log::debug!("{notification:?}");
    }

    Ok(())
}

fn report(desktop: &Desktop, list: panelkit::ControlId, vbar: panelkit::ControlId) {
    let value = desktop
        .scrollable(list)
        .map(|panel| panel.scroll_value(Orientation::Vertical))
        .unwrap_or_default();
    let bar = desktop.scroll_bar(vbar).map(|bar| bar.value()).unwrap_or_default();
    println!("scroll value {value:.3}, bar {bar:.3}");
}
