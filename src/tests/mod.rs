mod common;

mod content;
mod hooks;
mod scroll;
mod theme;
