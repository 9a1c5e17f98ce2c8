// shared-api/src/lib.rs
//
// Wire contract shared between the Murmur web client and the HTTP API it
// talks to. Field names follow the wire, Rust names follow Rust.

pub mod api;
pub mod model;

pub use model::{Message, SessionUser};

/// Public submission link for a user: `{origin}/u/{username}`.
///
/// Anyone holding this link can send the user an anonymous message. A
/// trailing slash on `origin` is tolerated so callers can pass the page
/// origin verbatim.
pub fn profile_url(origin: &str, username: &str) -> String {
    format!("{}/u/{}", origin.trim_end_matches('/'), username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_joins_origin_and_username() {
        assert_eq!(
            profile_url("https://example.com", "alice"),
            "https://example.com/u/alice"
        );
    }

    #[test]
    fn test_profile_url_tolerates_trailing_slash() {
        assert_eq!(
            profile_url("https://example.com/", "alice"),
            "https://example.com/u/alice"
        );
    }
}
