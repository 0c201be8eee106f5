use url::Url;

use crate::upstream::DEFAULT_UPSTREAM_URL;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:80";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("upstream_url '{value}' is not a valid url: {source}")]
    InvalidUpstreamUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Runtime configuration, read once from the environment at startup.
///
/// | variable       | default                     |
/// |----------------|-----------------------------|
/// | `address`      | `0.0.0.0:80`                |
/// | `upstream_url` | `https://pokeapi.co/api/v2` |
/// | `debug`        | off, `1` turns it on        |
#[derive(Debug)]
pub struct Settings {
    pub bind_address: String,
    pub upstream_url: Url,
    pub is_debug_on: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let is_debug_on = lookup("debug").is_some_and(|val| val == "1");
        let bind_address = lookup("address").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());

        let upstream_url = lookup("upstream_url").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.into());
        let upstream_url = Url::parse(&upstream_url).map_err(|source| {
            SettingsError::InvalidUpstreamUrl {
                value: upstream_url.clone(),
                source,
            }
        })?;

        Ok(Self {
            bind_address,
            upstream_url,
            is_debug_on,
        })
    }
}
