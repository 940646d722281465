use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    log::warn!("No page at /{}", segments.join("/"));

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center space-y-4 bg-white dark:bg-gray-900",
            h1 { class: "text-3xl font-bold text-gray-900 dark:text-white", "Page not found" }
            Link {
                class: "text-emerald-600 hover:text-emerald-700 dark:text-teal-400",
                to: Route::Landing {},
                "Back to Radica"
            }
        }
    }
}
