use dioxus::prelude::*;

use crate::session::use_session;

#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<crate::Route>();
    let session = use_session();
    let current_path = route.to_string();
    let username = session.read().as_ref().map(|user| user.username.clone());

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h2 { "Murmur" }
            }
            nav { class: "sidebar-nav",
                Link {
                    to: crate::Route::Home {},
                    class: if current_path == "/" { "nav-item active" } else { "nav-item" },
                    "Home"
                }
                Link {
                    to: crate::Route::Dashboard {},
                    class: if current_path.contains("dashboard") { "nav-item active" } else { "nav-item" },
                    "Dashboard"
                }
            }
            div { class: "sidebar-footer",
                match username {
                    Some(name) => rsx! {
                        span { class: "sidebar-user", "Signed in as {name}" }
                    },
                    None => rsx! {
                        span { class: "sidebar-user", "Not signed in" }
                    },
                }
            }
        }
    }
}
