use dioxus::prelude::*;
use crate::views::{ Landing, PageNotFound };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    PageNotFound {
        segments: Vec<String>,
    },
}
