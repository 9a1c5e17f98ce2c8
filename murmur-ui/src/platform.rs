//! Browser/desktop seams: page origin and clipboard access.

/// Origin of the running page, e.g. `https://murmur.example`.
///
/// Desktop builds have no page location, so they read
/// `MURMUR_PUBLIC_ORIGIN` instead. `None` means the profile link cannot be
/// built and its card is omitted.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    std::env::var("MURMUR_PUBLIC_ORIGIN").ok()
}

/// Fire-and-forget clipboard write; a failed write is silently dropped.
#[cfg(target_arch = "wasm32")]
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}
