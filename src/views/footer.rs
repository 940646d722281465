use chrono::Datelike;
use dioxus::prelude::*;

use crate::configs::SiteConfig;
use crate::content::copyright_line;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let year = use_hook(|| chrono::Local::now().year());

    rsx! {
        footer {
            class: "bg-gray-900 dark:bg-gray-800 text-white dark:text-gray-200 py-8",
            div {
                class: "container mx-auto px-4 flex flex-col items-center space-y-4",
                div { class: "text-2xl font-bold mb-2", "{config.brand}" }
                div {
                    class: "text-sm text-gray-400 dark:text-gray-500 text-center",
                    {copyright_line(&config.brand, year)}
                }
            }
        }
    }
}
