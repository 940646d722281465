mod components;
mod configs;
mod content;
mod error;
mod hooks;
mod routes;
mod views;
pub mod host;
pub mod utils;
#[cfg(test)]
mod tests;

pub use crate::configs::SiteConfig;
pub use crate::error::SiteError;
pub use crate::hooks::use_theme;
pub use crate::routes::*;
pub use crate::utils::*;
