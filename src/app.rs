use dioxus::{prelude::*, signals::Signal};
use tracing::{error, info};

use crate::{
    domain::AppState,
    infra::predict::PredictClient,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::SearchPage,
        shell::Shell,
    },
    util::{assets, config::settings},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Search {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Runs one player query against the prediction service and folds the
/// outcome back into `state`. Responses of superseded queries are dropped.
pub async fn run_search(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let started = state.with_mut(|st| {
        if st.can_submit() {
            Some((st.begin_query(), st.player_name.clone()))
        } else {
            None
        }
    });
    let Some((ticket, player_name)) = started else {
        return;
    };

    info!(ticket = ticket.sequence(), %player_name, "searching player cards");

    let outcome = match PredictClient::new(settings()) {
        Ok(client) => client
            .predict(&player_name)
            .await
            .map_err(|err| err.to_string()),
        Err(err) => Err(format!("Failed to initialise prediction client: {err}")),
    };

    let summary = outcome
        .as_ref()
        .map(Vec::len)
        .map_err(|message| message.clone());
    let applied = state.with_mut(|st| st.finish_query(ticket, outcome));
    if !applied {
        info!(
            ticket = ticket.sequence(),
            %player_name,
            "discarding response of superseded query"
        );
        return;
    }

    if let Err(message) = &summary {
        error!(%player_name, %message, "player search failed");
    }
    let (kind, text) = search_toast(&player_name, summary);
    push_toast(toasts, kind, text);
}

fn search_toast(player_name: &str, summary: Result<usize, String>) -> (ToastKind, String) {
    match summary {
        Ok(0) => (ToastKind::Info, format!("No cards found for {player_name}.")),
        Ok(count) => (
            ToastKind::Success,
            format!("Found {count} card(s) for {player_name}."),
        ),
        Err(message) => (ToastKind::Error, format!("Search failed: {message}")),
    }
}

#[component]
pub fn Search() -> Element {
    rsx! { Shell { SearchPage {} } }
}
