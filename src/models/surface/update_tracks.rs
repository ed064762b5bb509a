use crate::models::common::eq_update;
use crate::models::surface::{
    report_error, ControlRequest, ControlRequestError, ReportedError, SurfaceError,
};
use crate::player::{PlayerRef, TrackId};
use crate::runtime::msg::{Action, ActionTracks, Internal, Msg};
use crate::runtime::{EffectFuture, Effects, Env, EnvFutureExt};
use futures::FutureExt;
use itertools::Itertools;
use serde::Serialize;

/// Alternate track enumeration and selection, exposed as a togglable list.
///
/// Tracks are sourced once from the player at connect time and stay static
/// for the lifetime of one player instance.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TrackListState {
    pub tracks: Vec<TrackId>,
    pub selected: TrackId,
    /// Purely local UI state, independent of playback.
    pub is_open: bool,
}

impl TrackListState {
    pub fn with_default(selected: TrackId) -> Self {
        TrackListState {
            selected,
            ..Default::default()
        }
    }
    pub fn populate(&mut self, tracks: Vec<TrackId>) {
        self.tracks = tracks.into_iter().unique().collect();
        // The caller-supplied default may not be among the enumerated
        // tracks; fall back to the first one so `selected` stays a member.
        if !self.tracks.is_empty() && !self.tracks.contains(&self.selected) {
            self.selected = self.tracks.first().cloned().unwrap_or_default();
        }
    }
}

/// `selected` reflects user intent: a switch rejection is reported
/// out-of-band without reverting the selection.
pub fn update_tracks<E: Env + 'static>(
    tracks: &mut TrackListState,
    last_error: &mut Option<ReportedError>,
    player: Option<&PlayerRef>,
    revision: u64,
    msg: &Msg,
) -> Effects {
    match msg {
        Msg::Action(Action::Tracks(ActionTracks::Open)) => eq_update(&mut tracks.is_open, true),
        Msg::Action(Action::Tracks(ActionTracks::Close)) => eq_update(&mut tracks.is_open, false),
        Msg::Action(Action::Tracks(ActionTracks::ToggleOpen)) => {
            tracks.is_open = !tracks.is_open;
            Effects::none()
        }
        Msg::Action(Action::Tracks(ActionTracks::Select(track_id))) => {
            if !tracks.tracks.contains(track_id) {
                return report_error::<E>(
                    last_error,
                    SurfaceError::ControlRequest(ControlRequestError::UnknownTrack(
                        track_id.to_owned(),
                    )),
                );
            }
            let selected_effects = eq_update(&mut tracks.selected, track_id.to_owned());
            match player {
                Some(player) => {
                    let request = EffectFuture::Concurrent(
                        player
                            .switch_track(track_id)
                            .map({
                                let track_id = track_id.to_owned();
                                move |result| {
                                    Msg::Internal(Internal::SwitchTrackResult(
                                        revision, track_id, result,
                                    ))
                                }
                            })
                            .boxed_env(),
                    );
                    selected_effects.join(Effects::future(request).unchanged())
                }
                _ => selected_effects,
            }
        }
        Msg::Internal(Internal::SwitchTrackResult(result_revision, _, Err(error)))
            if *result_revision == revision =>
        {
            report_error::<E>(
                last_error,
                SurfaceError::ControlRequest(ControlRequestError::Rejected(
                    ControlRequest::SwitchTrack,
                    error.to_owned(),
                )),
            )
        }
        _ => Effects::none().unchanged(),
    }
}
