use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{NotFoundView, PortfolioPage};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", PortfolioPage)] Home {},
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}
