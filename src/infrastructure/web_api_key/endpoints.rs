/// Default host of the community platform
pub const DEFAULT_BASE_URL: &str = "https://steamcommunity.com";

const KEY_INFO_PATH: &str = "/dev/apikey";
const REGISTER_PATH: &str = "/dev/registerkey";
const REVOKE_PATH: &str = "/dev/revokekey";

/// URLs of the three key management pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebApiEndpoints {
    pub key_info_url: String,
    pub register_url: String,
    pub revoke_url: String,
}

impl WebApiEndpoints {
    /// Standard page paths under `base_url` (no trailing slash expected)
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');

        Self {
            key_info_url: format!("{}{}", base, KEY_INFO_PATH),
            register_url: format!("{}{}", base, REGISTER_PATH),
            revoke_url: format!("{}{}", base, REVOKE_PATH),
        }
    }
}

impl Default for WebApiEndpoints {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = WebApiEndpoints::default();

        assert_eq!(endpoints.key_info_url, "https://steamcommunity.com/dev/apikey");
        assert_eq!(
            endpoints.register_url,
            "https://steamcommunity.com/dev/registerkey"
        );
        assert_eq!(endpoints.revoke_url, "https://steamcommunity.com/dev/revokekey");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let endpoints = WebApiEndpoints::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(endpoints.key_info_url, "http://127.0.0.1:8080/dev/apikey");
    }
}
