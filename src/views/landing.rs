use dioxus::prelude::*;

use crate::components::{ NavBar, RevealGroup, RevealItem };
use crate::hooks::use_section_nav;
use crate::utils::{ Anchor, RevealTrigger };
use super::{ CallToAction, Features, Footer, Hero, Process };

#[component]
pub fn Landing() -> Element {
    use_section_nav();

    rsx! {
        document::Title { "Radica | Product Authentication with NFC & Blockchain" }
        div {
            id: Anchor::Start.id(),
            class: "bg-white dark:bg-gray-900 min-h-screen",
            NavBar {}
            Hero {}
            Features {}
            Process {}
            CallToAction {}
            Footer {}
        }
    }
}

/// Centered title and blurb that open a section.
#[component]
pub fn SectionHeading(title: &'static str, copy: &'static str) -> Element {
    rsx! {
        RevealGroup {
            trigger: RevealTrigger::InView,
            class: "text-center mb-12",
            RevealItem {
                index: 0,
                h2 { class: "text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4", "{title}" }
            }
            RevealItem {
                index: 1,
                p { class: "text-base md:text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto", "{copy}" }
            }
        }
    }
}
