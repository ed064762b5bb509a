use crate::player::TrackId;
use crate::types::{InputEvent, SurfaceConfig};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionSurface {
    /// Begin the attach lifecycle with the given host configuration.
    ///
    /// Ignored while a previous attach is still connecting or connected.
    Attach(SurfaceConfig),
    /// Tear the surface down. Idempotent and safe before the player
    /// instantiation resolves.
    Detach,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionPlayback {
    /// Request a play/pause flip. No-op while a previous flip is in flight.
    TogglePlay,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionVolume {
    ToggleMute,
    /// Set the volume to a value in `[0, 1]`; `0` is an implicit mute.
    SetVolume(f64),
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionTracks {
    Open,
    Close,
    ToggleOpen,
    Select(TrackId),
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionVisibility {
    HoverEnter,
    HoverLeave,
    /// Inhibits auto-hide while `true`, e.g. during picture-in-picture.
    SetSuppressHide(bool),
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Surface(ActionSurface),
    Playback(ActionPlayback),
    Volume(ActionVolume),
    Tracks(ActionTracks),
    Visibility(ActionVisibility),
    /// Raw host input, routed to the owning control by the surface.
    Input(InputEvent),
}
