use dioxus::prelude::*;

#[component]
pub fn Button(onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            class: "btn",
            r#type: "button",
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
