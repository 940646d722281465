use dioxus::prelude::*;

use crate::configs::SiteConfig;
use crate::host::{ after_delay, smooth_scroll_to };
use crate::utils::{ Anchor, MenuState, EXIT_FALLBACK_MS };

/// Shared by every link that jumps to a section: closes the mobile menu and
/// scrolls to the anchor.
#[derive(Clone, Copy, PartialEq)]
pub struct SectionNav {
    menu: Signal<MenuState>,
    scroll: Signal<Option<Task>>,
    duration_ms: f64,
}

impl SectionNav {
    pub fn menu(&self) -> Signal<MenuState> {
        self.menu
    }

    pub fn go(mut self, anchor: Anchor) {
        self.menu.write().close();

        if let Some(previous) = self.scroll.take() {
            previous.cancel();
        }
        let duration = self.duration_ms;
        // Root scope: the clicked link may unmount with the mobile menu.
        let task = spawn_forever(async move {
            if let Err(err) = smooth_scroll_to(anchor, duration).await {
                log::warn!("Scroll to #{} failed: {}", anchor, err);
            }
        });
        self.scroll.set(task);
    }
}

/// Creates the page's `SectionNav` and provides it to descendants.
pub fn use_section_nav() -> SectionNav {
    let config = use_context::<SiteConfig>();
    let menu = use_signal(MenuState::default);
    let scroll = use_signal(|| None::<Task>);

    // animationend never fires for an overlay hidden by CSS, so every close
    // also gets a timed unmount.
    use_effect(move || {
        let state = menu();
        if state.is_leaving() {
            let ticket = state.exit_ticket();
            after_delay(EXIT_FALLBACK_MS, move || {
                let mut menu = menu;
                if let Ok(mut state) = menu.try_write() {
                    state.expire_exit(ticket);
                };
            });
        }
    });

    use_context_provider(|| SectionNav {
        menu,
        scroll,
        duration_ms: config.scroll_duration(),
    })
}
