use crate::constants::DEFAULT_VOLUME;
use crate::models::surface::{
    report_error, ControlRequest, ControlRequestError, ReportedError, SurfaceError,
};
use crate::player::PlayerRef;
use crate::runtime::msg::{Action, ActionVolume, Internal, Msg};
use crate::runtime::{EffectFuture, Effects, Env, EnvFutureExt};
use derivative::Derivative;
use futures::FutureExt;
use serde::Serialize;

/// Mute flag, current volume and the volume to restore on unmute.
///
/// `previous_volume` is only ever zero after the slider was explicitly
/// dragged to zero; toggling mute records the pre-mute volume instead.
#[derive(Derivative, Clone, PartialEq, Serialize, Debug)]
#[derivative(Default)]
#[serde(rename_all = "camelCase")]
pub struct VolumeState {
    pub is_muted: bool,
    #[derivative(Default(value = "DEFAULT_VOLUME"))]
    pub current_volume: f64,
    #[derivative(Default(value = "DEFAULT_VOLUME"))]
    pub previous_volume: f64,
    /// The stream carries an audio track. When it does not, every volume
    /// operation is a no-op.
    pub has_audio: bool,
}

impl VolumeState {
    pub fn from_probe(has_audio: bool) -> Self {
        VolumeState {
            has_audio,
            ..Default::default()
        }
    }
}

/// Volume requests are fire-and-forget: rejections are reported without
/// reverting local state, avoiding control flicker on transient failures.
pub fn update_volume<E: Env + 'static>(
    volume: &mut VolumeState,
    last_error: &mut Option<ReportedError>,
    player: Option<&PlayerRef>,
    revision: u64,
    msg: &Msg,
) -> Effects {
    match msg {
        Msg::Action(Action::Volume(action)) => {
            if !volume.has_audio {
                return Effects::none().unchanged();
            }
            let player = match player {
                Some(player) => player.to_owned(),
                _ => return Effects::none().unchanged(),
            };
            match action {
                ActionVolume::ToggleMute if !volume.is_muted => {
                    volume.is_muted = true;
                    volume.previous_volume = volume.current_volume;
                    volume.current_volume = 0.0;
                    Effects::future(mute_request(&player, true, revision))
                }
                ActionVolume::ToggleMute => {
                    volume.is_muted = false;
                    volume.current_volume = volume.previous_volume;
                    Effects::future(mute_request(&player, false, revision)).join(
                        Effects::future(set_volume_request(
                            &player,
                            volume.current_volume,
                            revision,
                        )),
                    )
                }
                ActionVolume::SetVolume(value) => {
                    let value = value.max(0.0).min(1.0);
                    if value == 0.0 {
                        // Dragging to zero is an implicit mute: the zero is
                        // remembered literally and is not restorable.
                        volume.is_muted = true;
                        volume.current_volume = 0.0;
                        volume.previous_volume = 0.0;
                        Effects::future(mute_request(&player, true, revision))
                    } else {
                        volume.is_muted = false;
                        volume.current_volume = value;
                        Effects::future(set_volume_request(&player, value, revision))
                    }
                }
            }
        }
        Msg::Internal(Internal::MuteResult(result_revision, _, Err(error)))
            if *result_revision == revision =>
        {
            report_error::<E>(
                last_error,
                SurfaceError::ControlRequest(ControlRequestError::Rejected(
                    ControlRequest::Mute,
                    error.to_owned(),
                )),
            )
        }
        Msg::Internal(Internal::SetVolumeResult(result_revision, _, Err(error)))
            if *result_revision == revision =>
        {
            report_error::<E>(
                last_error,
                SurfaceError::ControlRequest(ControlRequestError::Rejected(
                    ControlRequest::SetVolume,
                    error.to_owned(),
                )),
            )
        }
        _ => Effects::none().unchanged(),
    }
}

fn mute_request(player: &PlayerRef, muted: bool, revision: u64) -> EffectFuture {
    EffectFuture::Concurrent(
        player
            .mute(muted)
            .map(move |result| Msg::Internal(Internal::MuteResult(revision, muted, result)))
            .boxed_env(),
    )
}

fn set_volume_request(player: &PlayerRef, volume: f64, revision: u64) -> EffectFuture {
    EffectFuture::Concurrent(
        player
            .set_volume(volume)
            .map(move |result| Msg::Internal(Internal::SetVolumeResult(revision, volume, result)))
            .boxed_env(),
    )
}
