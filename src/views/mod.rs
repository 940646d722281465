mod call_to_action;
mod features;
mod footer;
mod hero;
mod landing;
mod not_found;
mod process;

pub use call_to_action::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use landing::{ Landing, SectionHeading };
pub use not_found::PageNotFound;
pub use process::Process;
