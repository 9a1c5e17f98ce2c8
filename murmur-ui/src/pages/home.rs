use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "landing",
            h1 { class: "landing-title", "Murmur" }
            p { class: "landing-tagline",
                "Honest, anonymous messages from anyone who has your link."
            }
            p { class: "landing-copy",
                "Share your personal link, decide when you are open to new "
                "messages, and read everything that comes in from one place."
            }
            Link { to: crate::Route::Dashboard {}, class: "landing-cta", "Open your dashboard" }
        }
    }
}
