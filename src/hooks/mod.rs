mod use_section_nav;
mod use_theme;

pub use use_section_nav::{ use_section_nav, SectionNav };
pub use use_theme::use_theme;
