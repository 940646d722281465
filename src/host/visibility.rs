use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ Element, IntersectionObserver, IntersectionObserverEntry };

use super::Subscription;

/// Calls `on_change` with whether `element` intersects the viewport, each
/// time that changes. Returns `None` when the host has no
/// IntersectionObserver.
pub fn observe_visibility(
    element: &Element,
    mut on_change: impl FnMut(bool) + 'static
) -> Option<Subscription> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let latest = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last();
            if let Some(entry) = latest {
                on_change(entry.is_intersecting());
            }
        }
    );

    let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(err) => {
            log::debug!("IntersectionObserver unavailable: {:?}", err);
            return None;
        }
    };
    observer.observe(element);

    Some(
        Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        })
    )
}
