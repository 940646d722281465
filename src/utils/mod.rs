mod anchor;
mod menu_state;
mod reveal;
mod scroll;
mod theme_controller;
mod theme_state;

pub use anchor::Anchor;
pub use menu_state::{ MenuState, EXIT_FALLBACK_MS };
pub use reveal::{ item_class, RevealTrigger, Stagger };
pub use scroll::{ ease_in_out_quad, ScrollAnimation };
pub use theme_controller::ThemeController;
pub use theme_state::{ Themed, ThemeState, DARK_CLASS };
