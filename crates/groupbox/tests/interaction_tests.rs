//! Tests for pointer and keyboard interaction through the event dispatcher.

use std::sync::Arc;

use parking_lot::Mutex;

use groupbox::prelude::*;
use groupbox::ContentMargins;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn press(group: &mut impl Widget, pos: Point) -> bool {
    group.event(&WidgetEvent::MousePress(MouseEvent::new(MouseButton::Left, pos)))
}

fn move_to(group: &mut impl Widget, pos: Point) -> bool {
    group.event(&WidgetEvent::MouseMove(MouseEvent::new(MouseButton::Left, pos)))
}

fn release(group: &mut impl Widget, pos: Point) -> bool {
    group.event(&WidgetEvent::MouseRelease(MouseEvent::new(MouseButton::Left, pos)))
}

fn record<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    signal.connect(move |value: &T| sink.lock().push(value.clone()));
    log
}

fn checkable_group() -> GroupBox {
    GroupBox::new("Network")
        .with_checkable(true)
        .with_size(Size::new(240.0, 120.0))
}

#[test]
fn test_click_inside_checkbox_flips_once() {
    init_tracing();
    let mut group = checkable_group();
    let toggled = record(&group.toggled);
    let clicked = record(&group.clicked);

    let target = group.check_rect().center();
    assert!(press(&mut group, target));
    assert!(release(&mut group, target));

    assert!(!group.is_checked());
    assert_eq!(*toggled.lock(), vec![false]);
    assert_eq!(*clicked.lock(), vec![false]);
}

#[test]
fn test_press_inside_release_outside_flips_nothing() {
    init_tracing();
    let mut group = checkable_group();
    let clicked = record(&group.clicked);

    let inside = group.check_rect().center();
    let outside = Point::new(200.0, 100.0);

    press(&mut group, inside);
    move_to(&mut group, outside);
    assert!(!group.is_check_pressed());
    release(&mut group, outside);

    assert!(group.is_checked());
    assert!(clicked.lock().is_empty());
    assert!(!group.is_check_pressed());
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut group = checkable_group();
    let target = group.check_rect().center();

    assert!(!release(&mut group, target));
    assert!(group.is_checked());
}

#[test]
fn test_hover_does_not_arm() {
    let mut group = checkable_group();
    let target = group.check_rect().center();

    assert!(!move_to(&mut group, target));
    assert!(!group.is_check_pressed());
}

#[test]
fn test_press_on_checkbox_release_on_collapse_does_nothing() {
    let mut group = checkable_group().with_collapsible(true);
    let collapse = record(&group.collapse_changed);

    let check = group.check_rect().center();
    let chevron = group.collapse_rect().center();

    press(&mut group, check);
    release(&mut group, chevron);

    assert!(group.is_checked());
    assert!(!group.is_collapsed());
    assert!(collapse.lock().is_empty());
}

#[test]
fn test_collapse_round_trip() {
    init_tracing();
    let mut group = GroupBox::new("Details")
        .with_collapsible(true)
        .with_size(Size::new(240.0, 120.0));
    let child = group.add_child("body");
    let changes = record(&group.collapse_changed);

    let target = group.collapse_rect().center();
    press(&mut group, target);
    release(&mut group, target);

    assert!(group.is_collapsed());
    assert!(!group.children().get(child).unwrap().visible);
    assert_eq!(group.size().height, group.minimum_size_hint().height);

    let target = group.collapse_rect().center();
    press(&mut group, target);
    release(&mut group, target);

    assert!(!group.is_collapsed());
    assert!(group.children().get(child).unwrap().visible);
    assert_eq!(*changes.lock(), vec![true, false]);
}

#[test]
fn test_keyboard_activation() {
    let mut group = checkable_group();
    let clicked = record(&group.clicked);
    group.event(&WidgetEvent::Change(ChangeEvent::FocusIn));

    assert!(group.event(&WidgetEvent::KeyPress(KeyEvent::new(Key::Space))));
    assert!(group.is_check_pressed());
    assert!(group.event(&WidgetEvent::KeyRelease(KeyEvent::new(Key::Space))));

    assert!(!group.is_checked());
    assert_eq!(*clicked.lock(), vec![false]);
}

#[test]
fn test_focus_out_cancels_key_press() {
    let mut group = checkable_group();
    group.event(&WidgetEvent::Change(ChangeEvent::FocusIn));
    group.event(&WidgetEvent::KeyPress(KeyEvent::new(Key::Space)));

    group.event(&WidgetEvent::Change(ChangeEvent::FocusOut));
    assert!(!group.is_check_pressed());
    assert!(!group.event(&WidgetEvent::KeyRelease(KeyEvent::new(Key::Space))));
    assert!(group.is_checked());
}

#[test]
fn test_space_during_chevron_press_leaves_checkbox_raised() {
    let mut group = checkable_group().with_collapsible(true);
    group.event(&WidgetEvent::Change(ChangeEvent::FocusIn));

    let chevron = group.collapse_rect().center();
    assert!(press(&mut group, chevron));
    assert!(!group.event(&WidgetEvent::KeyPress(KeyEvent::new(Key::Space))));
    assert!(!group.event(&WidgetEvent::KeyRelease(KeyEvent::new(Key::Space))));
    release(&mut group, Point::new(5.0, 110.0));

    assert!(!group.is_check_pressed());
    assert!(group.is_checked());
    assert!(!group.is_collapsed());
}

#[test]
fn test_chevron_press_cancels_key_press() {
    let mut group = checkable_group().with_collapsible(true);
    group.event(&WidgetEvent::Change(ChangeEvent::FocusIn));
    group.event(&WidgetEvent::KeyPress(KeyEvent::new(Key::Space)));
    assert!(group.is_check_pressed());

    let chevron = group.collapse_rect().center();
    press(&mut group, chevron);
    assert!(!group.is_check_pressed());
    assert!(!group.event(&WidgetEvent::KeyRelease(KeyEvent::new(Key::Space))));
    release(&mut group, chevron);

    assert!(!group.is_check_pressed());
    assert!(group.is_checked());
    assert!(group.is_collapsed());
}

#[test]
fn test_auto_repeat_does_not_arm() {
    let mut group = checkable_group();
    group.event(&WidgetEvent::Change(ChangeEvent::FocusIn));

    let repeat = KeyEvent {
        key: Key::Space,
        is_repeat: true,
    };
    assert!(!group.event(&WidgetEvent::KeyPress(repeat)));
    assert!(!group.is_check_pressed());

    assert!(group.event(&WidgetEvent::KeyPress(KeyEvent::new(Key::Space))));
    assert!(group.event(&WidgetEvent::KeyPress(repeat)));
    assert!(group.is_check_pressed());
    assert!(group.event(&WidgetEvent::KeyRelease(KeyEvent::new(Key::Space))));
    assert!(!group.is_checked());
}

#[test]
fn test_key_ignored_when_not_checkable() {
    let mut group = GroupBox::new("Plain").with_size(Size::new(240.0, 120.0));
    group.event(&WidgetEvent::Change(ChangeEvent::FocusIn));

    assert!(!group.event(&WidgetEvent::KeyPress(KeyEvent::new(Key::Space))));
    assert!(!group.is_check_pressed());
}

#[test]
fn test_disabling_mid_press_clears_state() {
    let mut group = checkable_group();
    let target = group.check_rect().center();
    press(&mut group, target);

    group.event(&WidgetEvent::Change(ChangeEvent::EnabledChange(false)));
    assert!(!group.is_check_pressed());

    group.event(&WidgetEvent::Change(ChangeEvent::EnabledChange(true)));
    assert!(!release(&mut group, target));
    assert!(group.is_checked());
}

#[test]
fn test_handled_events_request_repaint() {
    let mut group = checkable_group();
    let mut painter = RecordingPainter::new();
    group.paint(&mut painter);
    assert!(!group.take_repaint_request());

    let target = group.check_rect().center();
    press(&mut group, target);
    assert!(group.take_repaint_request());
    assert!(!group.take_repaint_request());
}

#[test]
fn test_resize_event_updates_hit_rects() {
    let mut group = GroupBox::new("Details").with_collapsible(true);
    group.event(&WidgetEvent::Resize(Size::new(300.0, 80.0)));

    let rect = group.collapse_rect();
    assert!(rect.right() <= 302.0);
    assert!(rect.left() > 280.0);
}

/// A host that forwards to a shared tree and records every call.
#[derive(Default)]
struct SharedTree {
    children: Vec<ChildId>,
    calls: Arc<Mutex<Vec<String>>>,
    margins: Option<ContentMargins>,
}

impl ChildHost for SharedTree {
    fn children(&self) -> Vec<ChildId> {
        self.children.clone()
    }

    fn set_child_enabled(&mut self, _child: ChildId, enabled: bool) {
        self.calls.lock().push(format!("enabled={enabled}"));
    }

    fn set_child_visible(&mut self, _child: ChildId, visible: bool) {
        self.calls.lock().push(format!("visible={visible}"));
    }

    fn set_content_margins(&mut self, margins: ContentMargins) {
        self.margins = Some(margins);
    }

    fn layout_minimum_size(&self) -> Option<Size> {
        Some(Size::new(320.0, 10.0))
    }
}

#[test]
fn test_custom_host() {
    let mut ids = ChildList::new();
    let a = ids.add("a");
    let b = ids.add("b");

    let calls = Arc::new(Mutex::new(Vec::new()));
    let tree = SharedTree {
        children: vec![a, b],
        calls: calls.clone(),
        margins: None,
    };

    let mut group = GroupBox::with_host("Shared", tree).with_checkable(true);
    assert!(group.children().margins.is_some());
    assert_eq!(group.minimum_size_hint().width, 320.0);

    calls.lock().clear();
    group.set_checked(false);
    assert_eq!(*calls.lock(), vec!["enabled=false", "enabled=false"]);

    calls.lock().clear();
    group.set_collapsible(true);
    group.set_collapsed(true);
    assert_eq!(
        *calls.lock(),
        vec!["visible=true", "visible=true", "visible=false", "visible=false"]
    );
}
