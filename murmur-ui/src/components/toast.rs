use std::time::Duration;

use dioxus_primitives::toast::{ToastOptions, Toasts};

pub use dioxus_primitives::toast::ToastProvider;

/// The one failure toast this app knows. Transport errors and non-2xx
/// responses both surface through it, and manual retry is the only recovery.
pub fn failure_toast(toasts: Toasts) {
    toasts.error(
        "Failed to Update".to_string(),
        ToastOptions::new()
            .description("Please try again")
            .duration(Duration::from_secs(5)),
    );
}
