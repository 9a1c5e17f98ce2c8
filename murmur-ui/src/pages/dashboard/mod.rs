use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, Toasts, use_toast};

use crate::api::ApiClient;
use crate::components::button::Button;
use crate::components::switch::Switch;
use crate::components::toast::failure_toast;
use crate::platform;
use crate::session::use_session;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::message_card::MessageCard;
use crate::widgets::profile_link::ProfileLink;
use crate::widgets::sidebar::Sidebar;

mod state;

use state::DashboardState;

#[component]
pub fn Dashboard() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toaster = use_toast();
    let mut state = use_signal(DashboardState::new);

    // Dispatch the two reads once per signed-in session. They run as
    // independent tasks with no ordering between them, each landing in its
    // own slice of state; unmounting the page drops whatever is still in
    // flight.
    let initial_api = api.clone();
    use_effect(move || {
        let signed_in = session.read().is_some();
        if state.write().arm_initial_load(signed_in) {
            load_acceptance(initial_api.clone(), state, toaster);
            load_messages(initial_api.clone(), state, toaster, false);
        }
    });

    let profile_url = use_memo(move || {
        let session = session.read();
        let user = session.as_ref()?;
        let origin = platform::page_origin()?;
        Some(shared_api::profile_url(&origin, &user.username))
    });

    if session.read().is_none() {
        return rsx! {
            div { class: "login-gate", "Please Login" }
        };
    }

    let checked = state.read().switch_checked();
    let disabled = state.read().switch_disabled();
    let loading = state.read().is_loading_messages();
    let messages = state.read().messages().to_vec();

    let refresh_api = api.clone();
    let empty_api = api.clone();
    let toggle_api = api.clone();

    rsx! {
        div { class: "dashboard",
            Sidebar {}
            div { class: "dashboard-body",
                section { class: "dashboard-main",
                    div { class: "dashboard-heading",
                        h1 { "Dashboard" }
                        Button {
                            onclick: move |_| load_messages(refresh_api.clone(), state, toaster, true),
                            "Refresh"
                        }
                    }
                    if loading {
                        p { class: "loading-indicator", "Loading Messages..." }
                    } else if messages.is_empty() {
                        EmptyState {
                            icon: Some("📭".to_string()),
                            title: "No Messages Found".to_string(),
                            description: "Share your link to start receiving anonymous messages.".to_string(),
                            action_label: Some("Refresh".to_string()),
                            on_action: Some(
                                EventHandler::new(move |_| {
                                    load_messages(empty_api.clone(), state, toaster, true)
                                }),
                            ),
                        }
                    } else {
                        div { class: "message-grid",
                            for message in messages {
                                MessageCard {
                                    key: "{message.id}",
                                    message: message.clone(),
                                    on_delete: move |id: String| {
                                        state.write().remove_message(&id);
                                    },
                                }
                            }
                        }
                    }
                }
                aside { class: "dashboard-rail",
                    if let Some(url) = profile_url() {
                        ProfileLink { url }
                    }
                    div { class: "acceptance-row",
                        span { class: "acceptance-label", "Accepting Messages" }
                        Switch {
                            checked: checked,
                            disabled: disabled,
                            on_checked_change: move |desired: bool| {
                                let api = toggle_api.clone();
                                state.write().begin_toggle(desired);
                                spawn(async move {
                                    match api.update_acceptance(desired).await {
                                        Ok(response) => {
                                            state.write().confirm_toggle();
                                            toaster
                                                .success(
                                                    response.message,
                                                    ToastOptions::new().duration(Duration::from_secs(3)),
                                                );
                                        }
                                        Err(_) => {
                                            state.write().toggle_failed();
                                            failure_toast(toaster);
                                        }
                                    }
                                });
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Reads the acceptance flag into the switch mirror. On failure the mirror
/// keeps its prior value and the uniform failure toast is shown.
fn load_acceptance(api: ApiClient, mut state: Signal<DashboardState>, toasts: Toasts) {
    state.write().begin_flag_load();
    spawn(async move {
        match api.acceptance().await {
            Ok(response) => state.write().apply_acceptance(response.is_accepting_messages),
            Err(_) => {
                state.write().flag_load_failed();
                failure_toast(toasts);
            }
        }
    });
}

/// Replaces the message list from the server. `refresh` marks a
/// user-initiated reload, which also gets a success toast; the initial
/// load stays quiet. On failure the previous list is kept.
fn load_messages(api: ApiClient, mut state: Signal<DashboardState>, toasts: Toasts, refresh: bool) {
    let epoch = state.write().begin_message_load();
    spawn(async move {
        match api.messages().await {
            Ok(response) => {
                state.write().apply_messages(epoch, response.messages);
                if refresh {
                    toasts.success(
                        "Showing Latest Messages".to_string(),
                        ToastOptions::new()
                            .description("Refreshing messages")
                            .duration(Duration::from_secs(3)),
                    );
                }
            }
            Err(_) => {
                state.write().message_load_failed();
                failure_toast(toasts);
            }
        }
    });
}
