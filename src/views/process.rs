use dioxus::prelude::*;

use crate::components::{ RevealGroup, RevealItem };
use crate::content::{ PROCESS_COPY, PROCESS_TITLE, STEPS };
use crate::utils::{ Anchor, RevealTrigger };
use super::SectionHeading;

/// "How it works" steps.
#[component]
pub fn Process() -> Element {
    rsx! {
        section {
            id: Anchor::HowItWorks.id(),
            class: "bg-gray-50 dark:bg-gray-800 py-16",
            div {
                class: "container mx-auto px-4",
                SectionHeading { title: PROCESS_TITLE, copy: PROCESS_COPY }
                RevealGroup {
                    trigger: RevealTrigger::InView,
                    class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    for (index, step) in STEPS.iter().enumerate() {
                        RevealItem {
                            key: "{index}",
                            index,
                            class: "bg-white dark:bg-gray-700 p-6 rounded-xl shadow-md text-center",
                            div {
                                class: "text-5xl md:text-6xl font-bold text-emerald-600 dark:text-teal-400 mb-4",
                                "{step.number}"
                            }
                            h3 { class: "text-xl md:text-2xl font-bold mb-2 text-gray-900 dark:text-white", "{step.title}" }
                            p { class: "text-gray-600 dark:text-gray-300", "{step.description}" }
                        }
                    }
                }
            }
        }
    }
}
