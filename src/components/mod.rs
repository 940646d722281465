mod icon;
mod navbar;
mod reveal;

pub use icon::{ Icon, IconGlyph };
pub use navbar::{ NavBar, NavLink };
pub use reveal::{ RevealGroup, RevealItem };
