use dioxus::prelude::*;

use crate::components::{ RevealGroup, RevealItem };
use crate::content::{ HERO_COPY, HERO_HIGHLIGHT, HERO_TITLE };
use crate::hooks::SectionNav;
use crate::utils::{ Anchor, RevealTrigger, Themed, ThemeState };

const LOGO: Themed<Asset> = Themed::new(
    asset!("/assets/logo.svg"),
    asset!("/assets/logo-no-background.svg")
);

#[component]
pub fn Hero() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let nav = use_context::<SectionNav>();

    rsx! {
        header {
            RevealGroup {
                trigger: RevealTrigger::Mount,
                class: "container mx-auto px-4 pt-24 flex flex-col-reverse md:flex-row items-center justify-between",
                RevealItem {
                    index: 0,
                    class: "w-full md:w-1/2 space-y-6 text-center md:text-left",
                    h1 {
                        class: "text-3xl md:text-5xl font-bold text-gray-900 dark:text-white",
                        "{HERO_TITLE} "
                        span { class: "text-emerald-600 dark:text-teal-400", "{HERO_HIGHLIGHT}" }
                    }
                    p { class: "text-base md:text-xl text-gray-600 dark:text-gray-300", "{HERO_COPY}" }
                    div {
                        class: "flex justify-center md:justify-start space-x-4",
                        button {
                            class: "bg-emerald-600 text-white px-4 py-2 md:px-6 md:py-3 rounded-full hover:bg-emerald-700 transition dark:bg-teal-500 dark:hover:bg-teal-600",
                            "Request Demo"
                        }
                        button {
                            class: "border border-emerald-600 text-emerald-600 px-4 py-2 md:px-6 md:py-3 rounded-full hover:bg-emerald-50 transition dark:border-teal-400 dark:text-teal-400 dark:hover:bg-teal-900/20",
                            onclick: move |_| nav.go(Anchor::Features),
                            "Learn More"
                        }
                    }
                }
                RevealItem {
                    index: 1,
                    class: "w-full md:w-1/2 mb-8 md:mb-0 flex justify-center md:justify-end",
                    img {
                        src: LOGO.pick(theme()),
                        alt: "Radica Logo",
                        class: "rounded-xl shadow-2xl max-w-xs h-auto",
                    }
                }
            }
        }
    }
}
