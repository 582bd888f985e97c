use dioxus::prelude::*;

use crate::{
    app::run_search,
    domain::AppState,
    ui::components::{
        card_table::{card_rows, CardTable},
        toast::ToastMessage,
    },
};

#[component]
pub fn SearchPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (player_name, can_submit, loading, error, idle) = state.with(|st| {
        (
            st.player_name.clone(),
            st.can_submit(),
            st.loading,
            st.error.clone(),
            st.is_idle(),
        )
    });
    let directive = state.with(|st| st.cards.directive());
    let rows = state.with(|st| card_rows(st.cards.ordered_view()));
    let has_rows = !rows.is_empty();

    let on_search = move |_| {
        spawn(run_search(state, toasts));
    };
    let on_sort = move |column: &'static str| {
        if let Err(err) = state.with_mut(|st| st.cards.activate_sort_by_name(column)) {
            tracing::warn!(%err, "ignoring header click");
        }
    };

    rsx! {
        div {
            class: "search",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "🔍 Enter a player name",
                value: "{player_name}",
                oninput: move |evt: FormEvent| {
                    let value = evt.value();
                    state.with_mut(|st| st.player_name = value);
                },
            }
            button {
                class: "search-button",
                disabled: !can_submit,
                onclick: on_search,
                if loading {
                    "🔄 Searching..."
                } else {
                    "🚀 Search"
                }
            }
        }

        if let Some(message) = error {
            div { class: "error-banner", "❌ Error: {message}" }
        }

        if has_rows {
            CardTable { rows, directive, on_sort }
        }

        if idle {
            div {
                class: "empty-hint",
                "🎮 Enter a player name and press Search to get started"
            }
        }
    }
}
