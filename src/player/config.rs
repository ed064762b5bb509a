use serde::{Deserialize, Serialize};
use url::Url;

/// Identifier of a selectable stream variant as enumerated by the player.
pub type TrackId = String;

/// Validated configuration handed to [`Env::create_player`].
///
/// [`Env::create_player`]: crate::runtime::Env::create_player
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub endpoint: Url,
    pub namespace: Option<String>,
    /// Track the playback starts on.
    pub starting_track: TrackId,
    /// TLS fingerprint location for endpoints with self-signed certificates.
    pub fingerprint: Option<Url>,
}
