use url::Url;

/// Environment variable holding the API origin.
pub const API_BASE_ENV: &str = "STOREFRONT_API_BASE";

/// Environment variable holding a bearer token for builds without a cookie jar.
pub const TOKEN_ENV: &str = "STOREFRONT_JWT_TOKEN";

pub const DEFAULT_API_BASE: &str = "https://apis.ccbp.in";

/// Baked in at build time so wasm bundles, which have no process environment, can be pointed elsewhere.
const BUILD_API_BASE: Option<&str> = std::option_env!("STOREFRONT_API_BASE");

#[derive(Clone, Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid STOREFRONT_API_BASE {value:?}: {source}")]
    InvalidApiBase {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub api_base: Url,
    pub token: Option<String>,
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to the build-time value and then the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = lookup(API_BASE_ENV)
            .or_else(|| BUILD_API_BASE.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base =
            Url::parse(&value).map_err(|source| ConfigError::InvalidApiBase { value, source })?;

        let token = lookup(TOKEN_ENV).filter(|token| !token.is_empty());

        Ok(Self { api_base, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (API_BASE_ENV, "http://127.0.0.1:8080"),
            (TOKEN_ENV, "secret"),
        ]))
        .unwrap();

        assert_eq!(config.api_base.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(config.token.as_deref(), Some("secret"));
    }

    #[test]
    fn empty_token_is_none() {
        let config = StorefrontConfig::from_lookup(lookup(&[(TOKEN_ENV, "")])).unwrap();
        assert_eq!(config.token, None);
    }

    #[test]
    fn rejects_bad_base() {
        let err = StorefrontConfig::from_lookup(lookup(&[(API_BASE_ENV, "not a url")])).unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn falls_back_to_default_base() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        let expected = BUILD_API_BASE.unwrap_or(DEFAULT_API_BASE);
        assert_eq!(config.api_base, Url::parse(expected).unwrap());
        assert_eq!(config.token, None);
    }
}
