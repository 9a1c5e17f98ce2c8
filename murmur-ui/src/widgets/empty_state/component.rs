use dioxus::prelude::*;

use crate::components::button::Button;

/// Placeholder for a region with nothing to show yet, with an optional
/// action to get out of that state.
#[component]
pub fn EmptyState(
    icon: Option<String>,
    title: String,
    description: String,
    action_label: Option<String>,
    on_action: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            if let Some(icon) = icon {
                div { class: "empty-icon", "{icon}" }
            }
            h3 { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            if let Some(label) = action_label {
                Button {
                    onclick: move |e| {
                        if let Some(handler) = &on_action {
                            handler.call(e);
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}
