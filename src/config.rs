use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Runtime configuration, read from the environment (a `.env` file is
/// loaded by main before this runs).
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let base_url = env::var("TELLER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Config {
            base_url: normalize_base_url(&base_url),
        }
    }
}

/// Strip trailing slashes so endpoint paths can be appended directly
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:5000/"),
            "http://localhost:5000"
        );
        assert_eq!(
            normalize_base_url("http://localhost:5000"),
            "http://localhost:5000"
        );
    }
}
