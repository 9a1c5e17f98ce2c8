#[derive(Clone)]
pub struct Config {
    pub server_url: String,
    pub api_base_url: String,
}

impl Config {
    /// Reads `MURMUR_SERVER_URL`. The default is the empty string, which
    /// makes every request same-origin relative (the web deployment).
    /// Desktop builds and tests point it at an explicit server.
    pub fn from_env() -> Self {
        let server_url = std::env::var("MURMUR_SERVER_URL").unwrap_or_default();
        Self::with_server_url(server_url)
    }

    pub fn with_server_url(url: impl Into<String>) -> Self {
        let server_url = url.into().trim_end_matches('/').to_string();
        let api_base_url = format!("{}/api", server_url);
        Self {
            server_url,
            api_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::with_server_url("http://localhost:9000/");
        assert_eq!(config.server_url, "http://localhost:9000");
        assert_eq!(config.api_base_url, "http://localhost:9000/api");
    }

    #[test]
    fn test_empty_server_url_means_same_origin() {
        let config = Config::with_server_url("");
        assert_eq!(config.server_url, "");
        assert_eq!(config.api_base_url, "/api");
    }
}
