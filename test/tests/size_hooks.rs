//! Tests for `use_window_size` and `use_value_by_size`.

use std::{cell::RefCell, rc::Rc};

use floem_reactive::create_effect;
use floem_window_size_test::prelude::*;

fn letters() -> ValueBySize<DefaultSize, &'static str> {
    ValueBySize::new(DefaultSize::Mobile, "A")
        .or(DefaultSize::Tablet, "B")
        .or(DefaultSize::Desktop, "C")
}

#[test]
fn test_value_by_size_at_tablet_boundary() {
    let window = test_window(421, 900);
    let cx = create_window_size(WindowSizeConfig::new().window(window.clone()));
    let _watcher = cx.mount_watcher();

    assert_eq!(cx.use_value_by_size(&letters()), "B");
}

#[test]
fn test_value_by_size_rerenders_on_resize() {
    let window = test_window(1920, 1080);
    let cx = create_window_size(WindowSizeConfig::new().window(window.clone()));
    let _watcher = cx.mount_watcher();

    let values = ValueBySize::new(DefaultSize::Mobile, 1)
        .or(768.0, 2)
        .or(DefaultSize::Tablet, 3)
        .or(DefaultSize::Desktop, 4);
    let columns = Rc::new(RefCell::new(Vec::new()));
    create_effect({
        let cx = cx.clone();
        let columns = columns.clone();
        move |_| columns.borrow_mut().push(cx.use_value_by_size(&values))
    });

    resize(&window, 375.0, 812.0);
    resize(&window, 768.0, 1024.0);
    resize(&window, 1000.0, 800.0);

    assert_eq!(*columns.borrow(), [4, 1, 2, 3]);
}

#[test]
fn test_custom_sizes_and_catch_all() {
    let sizes = SizeTable::new([
        ("compact".to_string(), 600.0),
        ("medium".to_string(), 840.0),
        ("expanded".to_string(), 1200.0),
    ])
    .unwrap();
    let window = test_window(500, 800);
    let cx = create_window_size(WindowSizeConfig::with_sizes(sizes).window(window.clone()));
    let _watcher = cx.mount_watcher();
    let tracker = RenderTracker::track(&cx);

    resize(&window, 700.0, 800.0);
    resize(&window, 5000.0, 800.0);

    let names: Vec<_> = tracker.seen().into_iter().map(|s| s.size).collect();
    assert_eq!(names, ["compact", "medium", "expanded"]);

    let values = ValueBySize::<String, &str>::try_from(vec![
        (SizeKey::Size("compact".to_string()), "one pane"),
        (SizeKey::Size("expanded".to_string()), "two panes"),
    ])
    .unwrap();
    assert_eq!(cx.use_value_by_size(&values), "two panes");
}

#[test]
fn test_window_size_reports_live_dimensions() {
    let window = Rc::new(EventLoopWindow::new(PhysicalSize::new(2560, 1600), 2.0));
    let cx = create_window_size(WindowSizeConfig::new().window(window.clone()));
    let _watcher = cx.mount_watcher();

    let size = cx.use_window_size();
    assert_eq!(size.width, 1280.0);
    assert_eq!(size.height, 800.0);
    assert_eq!(size.size, DefaultSize::Desktop);
    assert!(size.ready);

    window.resized(PhysicalSize::new(800, 1600));
    assert_eq!(cx.use_window_size().size, DefaultSize::Mobile);
}

#[test]
fn test_context_lookup_from_reactive_context() {
    let window = test_window(900, 700);
    let cx = create_window_size(WindowSizeConfig::new().window(window.clone()));
    cx.provide();
    let _watcher = cx.mount_watcher();

    let found = WindowSizeContext::<DefaultSize>::from_context().unwrap();
    resize(&window, 300.0, 700.0);
    assert_eq!(found.use_window_size().size, DefaultSize::Mobile);
    assert_eq!(*found.sizes(), SizeTable::<DefaultSize>::default());
}
