use crate::player::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Attach parameters missing or invalid. Terminal for the attach attempt,
/// no player instantiation is tried.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(tag = "type", content = "content")]
pub enum ConfigError {
    MissingEndpoint,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            ConfigError::MissingEndpoint => write!(f, "No endpoint provided"),
        }
    }
}

/// Raw configuration supplied by the host when mounting the surface.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceConfig {
    pub endpoint: Option<Url>,
    pub namespace: Option<String>,
    /// Index of the track the playback should start on, defaults to `0`.
    pub track_index: Option<usize>,
    pub fingerprint_hint: Option<Url>,
}

impl SurfaceConfig {
    pub fn validate(&self) -> Result<PlayerConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .as_ref()
            .ok_or(ConfigError::MissingEndpoint)?
            .to_owned();
        Ok(PlayerConfig {
            endpoint,
            namespace: self.namespace.to_owned(),
            starting_track: self.track_index.unwrap_or_default().to_string(),
            fingerprint: self.fingerprint_hint.to_owned(),
        })
    }
}
