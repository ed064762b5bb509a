use crate::player::{PlayerError, PlayerRef, TrackId};

//
// Those messages are meant to be dispatched and handled only inside this crate
//
// Every result carries the attach revision it was issued under; the surface
// discards results whose revision no longer matches.
//
#[derive(Debug)]
pub enum Internal {
    /// Result of the asynchronous player instantiation.
    PlayerCreateResult(u64, Result<PlayerRef, PlayerError>),
    /// The player's single-fire closure signal resolved.
    PlayerClosedResult(u64, Result<(), PlayerError>),
    /// Result of a play/pause flip, with the transport's paused state read
    /// after the flip was applied.
    PlayToggleResult(u64, Result<bool, PlayerError>),
    /// Result of a mute request carrying the requested flag.
    MuteResult(u64, bool, Result<(), PlayerError>),
    /// Result of a set-volume request carrying the requested value.
    SetVolumeResult(u64, f64, Result<(), PlayerError>),
    /// Result of a track switch request.
    SwitchTrackResult(u64, TrackId, Result<(), PlayerError>),
    /// The auto-hide quiet interval elapsed; the second value is the hide
    /// epoch the countdown was armed at.
    HideControlsTimeout(u64, u64),
}
