//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Search input with a submit button
///
/// Every input event stores the raw value - no trimming, no debouncing, no
/// minimum length. The Enter key and the button both submit.
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "search-bar",
            style: "
                display: flex;
                gap: 8px;
                padding: 12px 16px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",

            input {
                r#type: "text",
                placeholder: "Search for products...",
                value: "{state.query}",
                oninput: move |evt| {
                    state.query.set(evt.value());
                },
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        state.submit_search();
                    }
                },
                style: "
                    flex: 1;
                    padding: 8px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            button {
                onclick: move |_| {
                    state.submit_search();
                },
                style: "
                    padding: 8px 16px;
                    border: none;
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                    cursor: pointer;
                ",
                "Search"
            }
        }
    }
}
