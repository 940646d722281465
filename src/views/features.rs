use dioxus::prelude::*;

use crate::components::{ IconGlyph, RevealGroup, RevealItem };
use crate::content::{ FEATURES, FEATURES_COPY, FEATURES_TITLE };
use crate::utils::{ Anchor, RevealTrigger };
use super::SectionHeading;

#[component]
pub fn Features() -> Element {
    rsx! {
        section {
            id: Anchor::Features.id(),
            class: "container mx-auto px-4 py-16",
            SectionHeading { title: FEATURES_TITLE, copy: FEATURES_COPY }
            RevealGroup {
                trigger: RevealTrigger::InView,
                class: "grid grid-cols-1 md:grid-cols-4 gap-6",
                for (index, feature) in FEATURES.iter().enumerate() {
                    RevealItem {
                        key: "{index}",
                        index,
                        class: "bg-white dark:bg-gray-800 p-6 rounded-xl shadow-md text-center hover:shadow-xl transition",
                        div {
                            class: "mb-4 flex justify-center",
                            IconGlyph { icon: feature.icon, size: 48, class: "text-emerald-600 dark:text-teal-400" }
                        }
                        h3 { class: "text-xl font-bold mb-2 text-gray-900 dark:text-white", "{feature.title}" }
                        p { class: "text-gray-600 dark:text-gray-300", "{feature.description}" }
                    }
                }
            }
        }
    }
}
