use dioxus::prelude::*;

/// Two-state toggle rendered as a `role="switch"` button.
///
/// Purely controlled: the displayed value is whatever `checked` says, and
/// interaction only reports the desired value through `on_checked_change`.
#[component]
pub fn Switch(checked: bool, disabled: bool, on_checked_change: EventHandler<bool>) -> Element {
    rsx! {
        button {
            r#type: "button",
            role: "switch",
            class: if checked { "switch checked" } else { "switch" },
            aria_checked: checked,
            disabled: disabled,
            onclick: move |_| on_checked_change.call(!checked),
            span { class: "switch-thumb" }
        }
    }
}
