//! Result list component

use dioxus::prelude::*;

use crate::state::AppState;

/// List of product names from the most recent search
///
/// Hits carry no stable identity, so items are keyed by position. The empty
/// state renders the same before any search and after an empty response.
#[component]
pub fn ResultList() -> Element {
    let state = use_context::<AppState>();
    let results = (state.results)();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "result-list",
            style: "background: {colors.bg_primary};",

            if results.is_empty() {
                div {
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "No results to show"
                }
            } else {
                ul {
                    style: "margin: 0; padding: 8px 0; list-style: none;",

                    for (index, hit) in results.iter().enumerate() {
                        li {
                            key: "{index}",
                            style: "
                                padding: 8px 16px;
                                border-bottom: 1px solid {colors.border};
                                color: {colors.text_primary};
                            ",
                            "{hit.source.name}"
                        }
                    }
                }
            }
        }
    }
}
