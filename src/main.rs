use dioxus::prelude::*;
use radica_landing::host::MediaQueryHost;
use radica_landing::{ use_theme, Route, SiteConfig };

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    let loaded = SiteConfig::embedded();
    let config = loaded.clone().unwrap_or_default();
    let level = config.level().unwrap_or(log::Level::Info);

    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", level.as_str().to_lowercase());
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(level).expect("failed to init console logger");
    }

    if let Err(err) = loaded {
        log::warn!("Invalid site config, using defaults: {}", err);
    }
    log::info!("Starting {} landing page (theming: {})", config.brand, config.theming);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<SiteConfig>();
    let theme = use_theme(|| config.theming.then(MediaQueryHost::dark_scheme));
    use_context_provider(|| theme);

    rsx! {
        div {
            class: theme().root_class(),
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }
            Router::<Route> {}
        }
    }
}
