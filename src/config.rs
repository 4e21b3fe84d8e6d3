// src/config.rs
pub const API_BASE_URL_ENV_VAR: &str = "API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// `base_url` is the `--base-url` / `API_BASE_URL` value; blank or absent means the local default.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_default() {
        assert_eq!(Config::new(None).base_url, DEFAULT_API_BASE_URL);
        assert_eq!(
            Config::new(Some("  ".to_string())).base_url,
            DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn trims_trailing_slash() {
        let config = Config::new(Some(" http://api.internal:9000/ ".to_string()));
        assert_eq!(config.base_url, "http://api.internal:9000");
    }
}
