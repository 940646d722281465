use dioxus::prelude::*;

use crate::components::{ Icon, IconGlyph };
use crate::configs::SiteConfig;
use crate::content::NAV_ITEMS;
use crate::hooks::SectionNav;
use crate::utils::{ Anchor, Themed, ThemeState };

const LINK_CLASS: &str =
    "cursor-pointer text-gray-700 hover:text-emerald-600 dark:text-gray-300 dark:hover:text-teal-400";
const GITHUB_CLASS: &str =
    "bg-emerald-600 text-white px-4 py-2 rounded-full hover:bg-emerald-700 transition flex items-center dark:bg-teal-500 dark:hover:bg-teal-600";
const THEME_ICON: Themed<Icon> = Themed::new(Icon::Moon, Icon::Sun);

#[component]
pub fn NavBar() -> Element {
    let config = use_context::<SiteConfig>();
    let nav = use_context::<SectionNav>();
    let mut menu = nav.menu();

    rsx! {
        nav {
            class: "fixed top-0 w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-md z-50 shadow-sm",
            div {
                class: "container mx-auto px-4 py-3 flex justify-between items-center",
                NavLink {
                    anchor: Anchor::Start,
                    class: "text-2xl font-bold cursor-pointer text-emerald-600 dark:text-teal-400",
                    "{config.brand}"
                }

                div {
                    class: "hidden md:flex space-x-4 items-center",
                    for item in NAV_ITEMS.iter() {
                        NavLink { key: "{item.anchor}", anchor: item.anchor, class: LINK_CLASS, "{item.label}" }
                    }
                    GithubButton { href: config.repository_url.clone() }
                    if config.theming {
                        ThemeToggle {
                            class: "ml-4 text-gray-700 hover:text-emerald-600 dark:text-gray-300 dark:hover:text-teal-400"
                        }
                    }
                }

                div {
                    class: "md:hidden flex items-center space-x-4",
                    if config.theming {
                        ThemeToggle { class: "text-emerald-600 dark:text-teal-400" }
                    }
                    button {
                        class: "text-emerald-600 dark:text-teal-400",
                        "aria-label": menu.read().toggle_label(),
                        "aria-expanded": menu.read().is_open(),
                        onclick: move |_| {
                            menu.write().toggle();
                            log::debug!("Mobile menu open = {}", menu.read().is_open());
                        },
                        IconGlyph { icon: if menu.read().is_open() { Icon::X } else { Icon::Menu } }
                    }
                }
            }

            if menu.read().is_mounted() {
                MobileMenu {}
            }
        }
    }
}

/// Overlay shown below the bar on small screens. Unmounted once its exit
/// animation finishes.
#[component]
fn MobileMenu() -> Element {
    let config = use_context::<SiteConfig>();
    let nav = use_context::<SectionNav>();
    let mut menu = nav.menu();

    rsx! {
        div {
            class: "md:hidden absolute w-full bg-white dark:bg-gray-800 shadow-lg overflow-hidden {menu.read().overlay_class()}",
            onanimationend: move |_| menu.write().finish_exit(),
            div {
                class: "flex flex-col items-center space-y-4 py-6",
                for item in NAV_ITEMS.iter() {
                    NavLink { key: "{item.anchor}", anchor: item.anchor, class: LINK_CLASS, "{item.label}" }
                }
                GithubButton { href: config.repository_url.clone() }
            }
        }
    }
}

/// Link to an in-page section. Closes the mobile menu on click.
#[component]
pub fn NavLink(anchor: Anchor, #[props(into)] class: String, children: Element) -> Element {
    let nav = use_context::<SectionNav>();

    rsx! {
        a {
            class: "{class}",
            href: anchor.href(),
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                log::debug!("Navigating to #{}", anchor);
                nav.go(anchor);
            },
            {children}
        }
    }
}

#[component]
fn GithubButton(href: String) -> Element {
    rsx! {
        a {
            class: GITHUB_CLASS,
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            IconGlyph { icon: Icon::Github, class: "me-2 h-auto" }
            p { "GitHub" }
        }
    }
}

#[component]
fn ThemeToggle(#[props(into)] class: String) -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();

    rsx! {
        button {
            class: "{class}",
            "aria-label": theme.read().toggle_label(),
            onclick: move |_| {
                theme.write().toggle();
                log::debug!("Theme toggled, dark = {}", theme.read().is_dark);
            },
            IconGlyph { icon: THEME_ICON.pick(theme()) }
        }
    }
}
