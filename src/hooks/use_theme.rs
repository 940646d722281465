use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::host::ColorSchemeHost;
use crate::utils::{ ThemeController, ThemeState };

/// Theme signal seeded from the host color scheme and kept in step with it
/// until the calling component unmounts. `make_host` runs on the first render
/// only; returning `None` keeps the theme light with no listener registered.
pub fn use_theme<H>(make_host: impl FnOnce() -> Option<H>) -> Signal<ThemeState>
    where H: ColorSchemeHost + Clone + 'static
{
    let host = use_hook(make_host);
    let mut theme = use_signal(|| {
        host.as_ref().map(ThemeController::initial).unwrap_or_default()
    });

    let controller = use_hook(|| {
        let controller = host.as_ref().map(|host| {
            ThemeController::attach(host, move |next| theme.set(next))
        });
        Rc::new(RefCell::new(controller))
    });

    use_drop(move || {
        if let Some(mut controller) = controller.borrow_mut().take() {
            controller.detach();
            log::debug!("Color-scheme listener released");
        }
    });

    theme
}
