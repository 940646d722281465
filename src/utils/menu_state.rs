/// Longest the closed overlay stays mounted when `animationend` never fires,
/// e.g. because the overlay is `display: none` on a wide viewport.
pub const EXIT_FALLBACK_MS: u32 = 250;

/// Mobile overlay state.
///
/// `open` is what the user sees as MenuOpen. `leaving` keeps the overlay
/// mounted while its exit animation plays; it is cleared by `finish_exit`,
/// or by `expire_exit` once the fallback delay for that close has passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
    leaving: bool,
    exits: u32,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mounted(&self) -> bool {
        self.open || self.leaving
    }

    /// Closed but still mounted: an exit animation is (supposedly) running.
    pub fn is_leaving(&self) -> bool {
        !self.open && self.leaving
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.leaving = false;
        }
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            self.leaving = true;
            self.exits = self.exits.wrapping_add(1);
        }
    }

    pub fn finish_exit(&mut self) {
        if !self.open {
            self.leaving = false;
        }
    }

    /// Identifies the most recent close, for `expire_exit`.
    pub fn exit_ticket(&self) -> u32 {
        self.exits
    }

    /// Unmounts the overlay if it is still leaving from the close `ticket`
    /// names. Stale tickets from earlier closes are ignored.
    pub fn expire_exit(&mut self, ticket: u32) {
        if ticket == self.exits {
            self.finish_exit();
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.open { "menu-enter" } else { "menu-exit" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}
