use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};

use crate::components::button::Button;
use crate::platform;

/// The public link card: anyone holding the link can send the user an
/// anonymous message. The clipboard write is fire-and-forget.
#[component]
pub fn ProfileLink(url: String) -> Element {
    let toaster = use_toast();
    let copy_url = url.clone();

    rsx! {
        div { class: "profile-link-card",
            p { class: "profile-link-label", "Your Murmur Link" }
            div { class: "profile-link-url", "{url}" }
            Button {
                onclick: move |_| {
                    platform::copy_to_clipboard(&copy_url);
                    toaster
                        .success(
                            "Copied".to_string(),
                            ToastOptions::new()
                                .description("Profile URL has been copied to clipboard")
                                .duration(Duration::from_secs(3)),
                        );
                },
                "Copy URL"
            }
        }
    }
}
