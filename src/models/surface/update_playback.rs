use crate::models::surface::{
    report_error, ControlRequest, ControlRequestError, ReportedError, SurfaceError,
};
use crate::player::PlayerRef;
use crate::runtime::msg::{Action, ActionPlayback, Internal, Msg};
use crate::runtime::{EffectFuture, Effects, Env, EnvFutureExt};
use enclose::enclose;
use futures::FutureExt;
use serde::Serialize;

/// Play/pause intent with a pending guard against double-invocation.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub is_playing: bool,
    /// A flip request is in flight; further toggles are ignored until the
    /// outcome arrives.
    pub pending: bool,
}

/// The player's resolved request is the sole source of truth for
/// paused/playing; `is_playing` is never flipped optimistically, so the
/// visible state cannot diverge from the actual transport under slow
/// networks.
pub fn update_playback<E: Env + 'static>(
    playback: &mut PlaybackState,
    last_error: &mut Option<ReportedError>,
    player: Option<&PlayerRef>,
    revision: u64,
    msg: &Msg,
) -> Effects {
    match msg {
        Msg::Action(Action::Playback(ActionPlayback::TogglePlay)) => {
            if playback.pending {
                return Effects::none().unchanged();
            }
            let player = match player {
                Some(player) => player.to_owned(),
                _ => return Effects::none().unchanged(),
            };
            playback.pending = true;
            Effects::future(EffectFuture::Concurrent(
                player
                    .play()
                    .map(enclose!((player) move |result| {
                        let result = result.map(|_| player.is_paused());
                        Msg::Internal(Internal::PlayToggleResult(revision, result))
                    }))
                    .boxed_env(),
            ))
        }
        Msg::Internal(Internal::PlayToggleResult(result_revision, result))
            if *result_revision == revision && playback.pending =>
        {
            playback.pending = false;
            match result {
                Ok(is_paused) => {
                    playback.is_playing = !is_paused;
                    Effects::none()
                }
                Err(error) => report_error::<E>(
                    last_error,
                    SurfaceError::ControlRequest(ControlRequestError::Rejected(
                        ControlRequest::Play,
                        error.to_owned(),
                    )),
                ),
            }
        }
        _ => Effects::none().unchanged(),
    }
}
