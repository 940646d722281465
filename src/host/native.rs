//! Stand-ins for the browser host on desktop, mobile and test builds. There
//! is no `window` here, so every query reports the fallback.

use web_sys::Element;

use super::{ ColorSchemeHost, Subscription };
use crate::error::SiteError;
use crate::utils::Anchor;

/// Color-scheme host for targets without `matchMedia`: light, never changes.
#[derive(Clone, Debug, Default)]
pub struct MediaQueryHost;

impl MediaQueryHost {
    pub fn new(media: &str) -> Self {
        log::debug!("matchMedia unavailable for {}, theme stays at its default", media);
        Self
    }

    pub fn dark_scheme() -> Self {
        Self::new(super::DARK_SCHEME_QUERY)
    }
}

impl ColorSchemeHost for MediaQueryHost {
    fn prefers_dark(&self) -> bool {
        false
    }

    fn subscribe(&self, _on_change: Box<dyn FnMut(bool)>) -> Subscription {
        Subscription::inert()
    }
}

pub async fn smooth_scroll_to(anchor: Anchor, _duration_ms: f64) -> Result<(), SiteError> {
    Err(SiteError::Host(format!("no window to scroll to #{}", anchor)))
}

pub fn observe_visibility(
    _element: &Element,
    _on_change: impl FnMut(bool) + 'static
) -> Option<Subscription> {
    None
}

pub fn after_delay(_millis: u32, f: impl FnOnce() + 'static) {
    f();
}
