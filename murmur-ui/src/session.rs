//! Thin client for the external session provider.
//!
//! The provider fetches the session once on mount and exposes it to the
//! whole tree as a read-only signal. There are no partial states: children
//! see `Some(user)` or `None`, and a fetch failure is indistinguishable
//! from being signed out.

use dioxus::prelude::*;
use shared_api::SessionUser;

use crate::api::ApiClient;

#[derive(Clone, Copy)]
struct CurrentSession(ReadOnlySignal<Option<SessionUser>>);

/// The signed-in user, or `None`. Must be called under a [`SessionProvider`].
pub fn use_session() -> ReadOnlySignal<Option<SessionUser>> {
    use_context::<CurrentSession>().0
}

#[component]
pub fn SessionProvider(children: Element) -> Element {
    let api = use_context::<ApiClient>();
    let mut user = use_signal(|| None::<SessionUser>);
    use_context_provider(|| CurrentSession(user.into()));

    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            match api.session().await {
                Ok(response) => user.set(response.user),
                Err(err) => warn!("Session lookup failed, treating as signed out: {}", err),
            }
        });
    });

    rsx! {
        {children}
    }
}
