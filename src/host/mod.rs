//! Browser-facing plumbing. On wasm32 everything here talks to `web_sys`;
//! other targets get inert fallbacks from `native`. The state it feeds lives
//! in `utils` and is testable without a browser.

#[cfg(target_arch = "wasm32")]
mod media_query;
#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod scroll;
mod subscription;
#[cfg(target_arch = "wasm32")]
mod timer;
#[cfg(target_arch = "wasm32")]
mod visibility;

#[cfg(target_arch = "wasm32")]
pub use media_query::MediaQueryHost;
#[cfg(not(target_arch = "wasm32"))]
pub use native::{ after_delay, observe_visibility, smooth_scroll_to, MediaQueryHost };
#[cfg(target_arch = "wasm32")]
pub use scroll::smooth_scroll_to;
pub use subscription::Subscription;
#[cfg(target_arch = "wasm32")]
pub use timer::after_delay;
#[cfg(target_arch = "wasm32")]
pub use visibility::observe_visibility;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Source of the system color-scheme preference.
pub trait ColorSchemeHost {
    fn prefers_dark(&self) -> bool;

    /// Registers `on_change` for preference changes. The registration lives
    /// as long as the returned handle.
    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Subscription;
}
