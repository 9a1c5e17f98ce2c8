use dioxus::prelude::*;
use shared_api::Message;

/// One received message. The delete button only reports the id upward;
/// the dashboard owns the list and decides what removal means.
#[component]
pub fn MessageCard(message: Message, on_delete: EventHandler<String>) -> Element {
    let received = message.created_at.format("%b %d, %Y %H:%M").to_string();
    let id = message.id.clone();

    rsx! {
        div { class: "message-card",
            p { class: "message-content", "{message.content}" }
            div { class: "message-footer",
                span { class: "message-time", "{received}" }
                button {
                    class: "message-delete",
                    aria_label: "Delete message",
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}
