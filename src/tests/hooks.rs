use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::common::{ mocks::MockColorSchemeHost, setup };
use crate::configs::SiteConfig;
use crate::hooks::{ use_section_nav, use_theme, SectionNav };
use crate::utils::{ Anchor, ThemeState };

#[derive(Clone)]
struct ThemeHarness {
    host: MockColorSchemeHost,
    theme: Rc<RefCell<Option<Signal<ThemeState>>>>,
}

fn theme_root(harness: ThemeHarness) -> Element {
    let host = harness.host.clone();
    let theme = use_theme(move || Some(host));
    *harness.theme.borrow_mut() = Some(theme);

    rsx! {
        div { class: theme().root_class() }
    }
}

fn themeless_root(harness: ThemeHarness) -> Element {
    let theme = use_theme(|| None::<MockColorSchemeHost>);
    *harness.theme.borrow_mut() = Some(theme);

    rsx! {
        div {}
    }
}

#[derive(Clone)]
struct NavHarness {
    nav: Rc<RefCell<Option<SectionNav>>>,
}

fn nav_root(harness: NavHarness) -> Element {
    let nav = use_section_nav();
    *harness.nav.borrow_mut() = Some(nav);

    rsx! {
        div {}
    }
}

#[test]
fn test_use_theme_follows_host_until_teardown() {
    setup();
    let host = MockColorSchemeHost::new(true);
    let slot = Rc::new(RefCell::new(None));
    let mut dom = VirtualDom::new_with_props(theme_root, ThemeHarness {
        host: host.clone(),
        theme: slot.clone(),
    });
    dom.rebuild_in_place();

    let theme = (*slot.borrow()).expect("theme signal");
    assert_eq!(host.listener_count(), 1);
    assert!(dom.in_runtime(|| theme.read().is_dark));

    dom.in_runtime(|| host.emit(false));
    assert!(!dom.in_runtime(|| theme.read().is_dark));

    drop(dom);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_use_theme_without_host_stays_light() {
    setup();
    let host = MockColorSchemeHost::new(true);
    let slot = Rc::new(RefCell::new(None));
    let mut dom = VirtualDom::new_with_props(themeless_root, ThemeHarness {
        host: host.clone(),
        theme: slot.clone(),
    });
    dom.rebuild_in_place();

    let theme = (*slot.borrow()).expect("theme signal");
    assert!(!dom.in_runtime(|| theme.read().is_dark));
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_section_nav_closes_open_menu() {
    setup();
    let slot = Rc::new(RefCell::new(None));
    let mut dom = VirtualDom::new_with_props(nav_root, NavHarness { nav: slot.clone() })
        .with_root_context(SiteConfig::default());
    dom.rebuild_in_place();

    let nav = (*slot.borrow()).expect("section nav");
    dom.in_runtime(|| {
        let mut menu = nav.menu();
        menu.write().toggle();
        assert!(menu.read().is_open());

        nav.go(Anchor::Features);
        assert!(!menu.read().is_open());

        nav.go(Anchor::HowItWorks);
        assert!(!menu.read().is_open());
    });
}
