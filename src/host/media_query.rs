use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ MediaQueryList, MediaQueryListEvent };

use super::{ ColorSchemeHost, Subscription, DARK_SCHEME_QUERY };

/// Color-scheme preference read through `window.matchMedia`.
#[derive(Clone)]
pub struct MediaQueryHost {
    query: Option<MediaQueryList>,
}

impl MediaQueryHost {
    pub fn new(media: &str) -> Self {
        let query = web_sys::window().and_then(|window| window.match_media(media).ok().flatten());
        if query.is_none() {
            log::debug!("matchMedia unavailable for {}, theme stays at its default", media);
        }
        Self { query }
    }

    pub fn dark_scheme() -> Self {
        Self::new(DARK_SCHEME_QUERY)
    }
}

impl ColorSchemeHost for MediaQueryHost {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().map(|query| query.matches()).unwrap_or(false)
    }

    fn subscribe(&self, mut on_change: Box<dyn FnMut(bool)>) -> Subscription {
        let Some(query) = self.query.clone() else {
            return Subscription::inert();
        };

        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| on_change(event.matches())
        );
        if let Err(err) = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            log::warn!("Failed to listen for color-scheme changes: {:?}", err);
            return Subscription::inert();
        }

        Subscription::new(move || {
            if let Err(err) = query.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
                log::warn!("Failed to remove color-scheme listener: {:?}", err);
            }
            drop(callback);
        })
    }
}
