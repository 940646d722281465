use dioxus::prelude::*;

use crate::components::{ RevealGroup, RevealItem };
use crate::content::{ CTA_COPY, CTA_TITLE };
use crate::utils::RevealTrigger;

#[component]
pub fn CallToAction() -> Element {
    rsx! {
        section {
            class: "bg-emerald-600 text-white py-16 dark:bg-teal-700",
            RevealGroup {
                trigger: RevealTrigger::InView,
                class: "container mx-auto px-4 text-center",
                RevealItem {
                    index: 0,
                    h2 { class: "text-3xl md:text-4xl font-bold mb-4", "{CTA_TITLE}" }
                }
                RevealItem {
                    index: 1,
                    p { class: "text-base md:text-xl mb-8 max-w-2xl mx-auto dark:text-gray-200", "{CTA_COPY}" }
                }
                RevealItem {
                    index: 2,
                    button {
                        class: "bg-white text-emerald-600 px-6 py-3 rounded-full text-base md:text-xl font-bold hover:bg-teal-50 transition dark:text-teal-600",
                        "Coming Soon"
                    }
                }
            }
        }
    }
}
