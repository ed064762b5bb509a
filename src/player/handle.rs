use crate::player::{PlayerError, TrackId};
use crate::runtime::EnvFuture;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

pub type TryPlayerFuture<T> = EnvFuture<'static, Result<T, PlayerError>>;

/// The external player collaborator behind the control surface.
///
/// The player owns connection, decoding and transport; this crate only
/// issues requests against it and reconciles the outcomes. Every async
/// method is a suspend point with no ordering guarantee relative to other
/// in-flight requests.
pub trait PlayerHandle: Send + Sync {
    fn is_paused(&self) -> bool;
    /// Flips the transport state and resolves once the flip is applied.
    fn play(&self) -> TryPlayerFuture<()>;
    fn mute(&self, muted: bool) -> TryPlayerFuture<()>;
    fn set_volume(&self, volume: f64) -> TryPlayerFuture<()>;
    fn get_video_tracks(&self) -> Vec<TrackId>;
    fn get_audio_tracks(&self) -> Vec<TrackId>;
    fn switch_track(&self, track: &TrackId) -> TryPlayerFuture<()>;
    /// Structured catalog metadata, only for debugging.
    fn get_catalog(&self) -> serde_json::Value;
    /// Single-fire signal resolving when the stream ends or fails.
    fn closed(&self) -> TryPlayerFuture<()>;
    /// Idempotent teardown, does not wait for in-flight requests.
    fn close(&self);
}

/// Shared capability handle to the current player instance.
///
/// Owned by the control surface alone. Update functions receive it by
/// reference for the duration of one turn and effect futures clone it for
/// the duration of one request; nothing retains it across turns.
#[derive(Clone)]
pub struct PlayerRef(Arc<dyn PlayerHandle>);

impl PlayerRef {
    pub fn new(handle: Arc<dyn PlayerHandle>) -> Self {
        PlayerRef(handle)
    }
}

impl Deref for PlayerRef {
    type Target = dyn PlayerHandle;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for PlayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlayerRef")
    }
}
