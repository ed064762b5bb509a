use crate::player::{PlayerError, TrackId};
use crate::runtime::msg::{Event, Msg};
use crate::runtime::{Effects, Env};
use crate::types::ConfigError;
use chrono::{DateTime, Utc};
use derive_more::From;
use serde::Serialize;
use std::fmt;

/// The control request a player rejection belongs to.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub enum ControlRequest {
    Play,
    Mute,
    SetVolume,
    SwitchTrack,
}

impl fmt::Display for ControlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            ControlRequest::Play => write!(f, "play"),
            ControlRequest::Mute => write!(f, "mute"),
            ControlRequest::SetVolume => write!(f, "set-volume"),
            ControlRequest::SwitchTrack => write!(f, "switch-track"),
        }
    }
}

/// Recoverable control failure; the surface stays interactive.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(tag = "type", content = "content")]
pub enum ControlRequestError {
    /// The player rejected the request. Local state is kept per control
    /// policy, see the update modules.
    Rejected(ControlRequest, PlayerError),
    /// A track was selected that the player never enumerated; indicates a
    /// UI/data desync and is never silently swallowed.
    UnknownTrack(TrackId),
}

impl fmt::Display for ControlRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            ControlRequestError::Rejected(request, error) => {
                write!(f, "{} request rejected: {}", request, error.message())
            }
            ControlRequestError::UnknownTrack(track_id) => {
                write!(f, "Unknown track: {}", track_id)
            }
        }
    }
}

#[derive(Clone, PartialEq, From, Serialize, Debug)]
#[serde(tag = "type", content = "content")]
pub enum SurfaceError {
    /// Terminal, no retry; the host must fix the configuration.
    Configuration(ConfigError),
    /// Player instantiation rejected; terminal for this attach cycle, the
    /// host must re-attach to retry.
    Connection(PlayerError),
    ControlRequest(ControlRequestError),
    /// The closure signal fired; informational, possibly with no fault.
    StreamEnded(Option<PlayerError>),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            SurfaceError::Configuration(error) => write!(f, "Configuration: {}", error),
            SurfaceError::Connection(error) => write!(f, "Connection: {}", error.message()),
            SurfaceError::ControlRequest(error) => write!(f, "ControlRequest: {}", error),
            SurfaceError::StreamEnded(Some(error)) => {
                write!(f, "StreamEnded: {}", error.message())
            }
            SurfaceError::StreamEnded(None) => write!(f, "StreamEnded"),
        }
    }
}

/// The single error slot surfaced to the host. Last report only, cleared
/// on the next successful lifecycle transition.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportedError {
    pub error: SurfaceError,
    pub at: DateTime<Utc>,
}

pub fn report_error<E: Env + 'static>(
    slot: &mut Option<ReportedError>,
    error: SurfaceError,
) -> Effects {
    *slot = Some(ReportedError {
        error: error.to_owned(),
        at: E::now(),
    });
    Effects::msg(Msg::Event(Event::Error { error }))
}
