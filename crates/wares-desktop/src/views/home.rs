//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{ResultList, SearchBar};

/// Home view component - search bar above the result list
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            SearchBar {}

            div {
                class: "content-area",
                style: "flex: 1; overflow-y: auto;",

                ResultList {}
            }
        }
    }
}
