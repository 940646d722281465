use std::cell::Cell;
use std::rc::Rc;

use super::common::{ mocks::MockColorSchemeHost, setup };
use crate::utils::{ Themed, ThemeController, ThemeState, DARK_CLASS };

fn attach(host: &MockColorSchemeHost) -> (Rc<Cell<ThemeState>>, ThemeController) {
    let state = Rc::new(Cell::new(ThemeController::initial(host)));
    let sink = Rc::clone(&state);
    let controller = ThemeController::attach(host, move |next| sink.set(next));
    (state, controller)
}

#[test]
fn test_initial_theme_matches_host() {
    setup();
    let dark_host = MockColorSchemeHost::new(true);
    let light_host = MockColorSchemeHost::new(false);

    assert!(ThemeController::initial(&dark_host).is_dark);
    assert!(!ThemeController::initial(&light_host).is_dark);
}

#[test]
fn test_attach_does_not_apply_until_notified() {
    setup();
    let host = MockColorSchemeHost::new(true);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let controller = ThemeController::attach(&host, move |_| counter.set(counter.get() + 1));

    assert!(controller.is_attached());
    assert_eq!(host.listener_count(), 1);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_notification_updates_theme_and_marker() {
    setup();
    let host = MockColorSchemeHost::new(false);
    let (state, _controller) = attach(&host);
    assert_eq!(state.get().root_class(), "");

    host.emit(true);
    assert!(state.get().is_dark);
    assert_eq!(state.get().root_class(), DARK_CLASS);

    host.emit(false);
    assert!(!state.get().is_dark);
    assert_eq!(state.get().root_class(), "");
}

#[test]
fn test_toggle_flips_once_and_leaves_listener_alone() {
    setup();
    let host = MockColorSchemeHost::new(false);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let _controller = ThemeController::attach(&host, move |_| counter.set(counter.get() + 1));

    let mut theme = ThemeController::initial(&host);
    theme.toggle();
    assert!(theme.is_dark);
    theme.toggle();
    assert!(!theme.is_dark);

    assert_eq!(calls.get(), 0);
    assert_eq!(host.listener_count(), 1);
}

#[test]
fn test_last_write_wins() {
    setup();
    let host = MockColorSchemeHost::new(false);
    let (state, _controller) = attach(&host);

    host.emit(true);
    let mut theme = state.get();
    theme.toggle();
    state.set(theme);
    assert!(!state.get().is_dark);

    host.emit(true);
    assert!(state.get().is_dark);
}

#[test]
fn test_detach_stops_updates() {
    setup();
    let host = MockColorSchemeHost::new(false);
    let (state, mut controller) = attach(&host);

    controller.detach();
    assert!(!controller.is_attached());
    assert_eq!(host.listener_count(), 0);

    host.emit(true);
    assert!(!state.get().is_dark);
}

#[test]
fn test_dropping_controller_releases_listener() {
    setup();
    let host = MockColorSchemeHost::new(true);
    let (state, controller) = attach(&host);
    assert_eq!(host.listener_count(), 1);

    drop(controller);
    assert_eq!(host.listener_count(), 0);

    host.emit(false);
    assert!(state.get().is_dark);
}

#[test]
fn test_unsupported_host_keeps_initial_theme() {
    setup();
    let host = MockColorSchemeHost::unsupported(true);
    let (state, controller) = attach(&host);

    assert!(!controller.is_attached());
    host.emit(false);
    assert!(state.get().is_dark);
}

#[test]
fn test_themed_pick() {
    let logo = Themed::new("logo.svg", "logo-no-background.svg");

    assert_eq!(logo.pick(ThemeState::from_preference(false)), "logo.svg");
    assert_eq!(logo.pick(ThemeState::from_preference(true)), "logo-no-background.svg");
}

#[test]
fn test_toggle_label_names_the_other_mode() {
    assert_eq!(ThemeState::from_preference(true).toggle_label(), "Switch to light mode");
    assert_eq!(ThemeState::default().toggle_label(), "Switch to dark mode");
}
