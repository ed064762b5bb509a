use crate::models::surface::{
    report_error, start_hide_countdown, update_playback, update_tracks, update_visibility,
    update_volume, PlaybackState, ReportedError, SurfaceError, TrackListState, VisibilityState,
    VolumeState,
};
use crate::player::{PlayerConfig, PlayerError, PlayerRef, TrackId};
use crate::runtime::msg::{
    Action, ActionPlayback, ActionSurface, ActionVisibility, Event, Internal, Msg,
};
use crate::runtime::{EffectFuture, Effects, Env, EnvFutureExt, Update};
use crate::types::{InputEvent, SurfaceConfig};
use derivative::Derivative;
use futures::FutureExt;
use serde::Serialize;

#[derive(Derivative, Clone, PartialEq, Eq, Serialize, Debug)]
#[derivative(Default)]
#[serde(tag = "type")]
pub enum Lifecycle {
    #[derivative(Default)]
    Unattached,
    Connecting,
    Connected,
    Detached,
}

impl Lifecycle {
    /// Input and control messages are only applied between attach and
    /// detach.
    fn is_active(&self) -> bool {
        matches!(self, Lifecycle::Connecting | Lifecycle::Connected)
    }
}

/// The composed media-control widget.
///
/// Sole owner of the player handle and of the four control states. Every
/// async outcome carries the attach revision it was issued under and is
/// discarded when the revision has moved on, so a result arriving after a
/// detach (or a late instantiation success) never touches current state.
#[derive(Default, Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MediaControlSurface {
    pub lifecycle: Lifecycle,
    pub config: Option<PlayerConfig>,
    pub playback: PlaybackState,
    pub volume: VolumeState,
    pub tracks: TrackListState,
    pub visibility: VisibilityState,
    pub last_error: Option<ReportedError>,
    #[serde(skip)]
    player: Option<PlayerRef>,
    #[serde(skip)]
    attach_revision: u64,
}

/// Read-only state snapshot handed to the host for rendering.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ControlSnapshot<'a> {
    pub is_playing: bool,
    pub is_muted: bool,
    pub current_volume: f64,
    pub tracks: &'a [TrackId],
    pub selected: &'a TrackId,
    pub controls_visible: bool,
    pub last_error: Option<&'a ReportedError>,
}

impl MediaControlSurface {
    pub fn snapshot(&self) -> ControlSnapshot<'_> {
        ControlSnapshot {
            is_playing: self.playback.is_playing,
            is_muted: self.volume.is_muted,
            current_volume: self.volume.current_volume,
            tracks: &self.tracks.tracks,
            selected: &self.tracks.selected,
            controls_visible: self.visibility.visible,
            last_error: self.last_error.as_ref(),
        }
    }
    /// Structured catalog metadata from the live player, only for
    /// debugging.
    pub fn catalog(&self) -> Option<serde_json::Value> {
        self.player.as_ref().map(|player| player.get_catalog())
    }
    fn attach<E: Env + 'static>(&mut self, config: &SurfaceConfig) -> Effects {
        if self.lifecycle.is_active() {
            return Effects::none().unchanged();
        }
        let player_config = match config.validate() {
            Ok(player_config) => player_config,
            Err(error) => {
                return report_error::<E>(&mut self.last_error, SurfaceError::Configuration(error));
            }
        };
        self.attach_revision += 1;
        let revision = self.attach_revision;
        self.lifecycle = Lifecycle::Connecting;
        self.playback = PlaybackState::default();
        self.volume = VolumeState::default();
        self.tracks = TrackListState::with_default(player_config.starting_track.to_owned());
        self.visibility = VisibilityState::default();
        self.last_error = None;
        let create_effects = Effects::future(EffectFuture::Sequential(
            E::create_player(&player_config)
                .map(move |result| Msg::Internal(Internal::PlayerCreateResult(revision, result)))
                .boxed_env(),
        ));
        self.config = Some(player_config);
        create_effects.join(start_hide_countdown::<E>(&mut self.visibility, revision))
    }
    fn detach(&mut self) -> Effects {
        if let Lifecycle::Detached = self.lifecycle {
            return Effects::none().unchanged();
        }
        // Bumping the revision invalidates pending hide countdowns and any
        // in-flight player results in one stroke.
        self.attach_revision += 1;
        if let Some(player) = self.player.take() {
            player.close();
        }
        self.lifecycle = Lifecycle::Detached;
        Effects::none()
    }
    fn player_create_result<E: Env + 'static>(
        &mut self,
        revision: u64,
        result: &Result<PlayerRef, PlayerError>,
    ) -> Effects {
        if revision != self.attach_revision || !matches!(self.lifecycle, Lifecycle::Connecting) {
            // A success arriving after detach still owns a live player
            // instance; close it before discarding.
            if let Ok(player) = result {
                player.close();
            }
            #[cfg(debug_assertions)]
            E::log(format!(
                "discarding stale player instantiation result for revision {}",
                revision
            ));
            return Effects::none().unchanged();
        }
        match result {
            Ok(player) => {
                self.lifecycle = Lifecycle::Connected;
                self.last_error = None;
                self.playback = PlaybackState {
                    is_playing: !player.is_paused(),
                    pending: false,
                };
                self.volume = VolumeState::from_probe(!player.get_audio_tracks().is_empty());
                self.tracks.populate(player.get_video_tracks());
                let closed_effects = Effects::future(EffectFuture::Concurrent(
                    player
                        .closed()
                        .map(move |result| {
                            Msg::Internal(Internal::PlayerClosedResult(revision, result))
                        })
                        .boxed_env(),
                ));
                self.player = Some(player.to_owned());
                let created_event = self
                    .config
                    .as_ref()
                    .map(|config| {
                        Effects::msg(Msg::Event(Event::PlayerCreated {
                            endpoint: config.endpoint.to_owned(),
                        }))
                        .unchanged()
                    })
                    .unwrap_or_else(|| Effects::none().unchanged());
                Effects::none().join(closed_effects.unchanged()).join(created_event)
            }
            Err(error) => {
                // Terminal for this attach cycle; the host may re-attach to
                // retry and all controls stay inert meanwhile.
                self.lifecycle = Lifecycle::Unattached;
                report_error::<E>(&mut self.last_error, SurfaceError::Connection(error.to_owned()))
            }
        }
    }
    fn player_closed_result<E: Env + 'static>(
        &mut self,
        revision: u64,
        result: &Result<(), PlayerError>,
    ) -> Effects {
        if revision != self.attach_revision || self.player.is_none() {
            return Effects::none().unchanged();
        }
        self.player = None;
        let error = SurfaceError::StreamEnded(result.to_owned().err());
        report_error::<E>(&mut self.last_error, error)
            .join(Effects::msg(Msg::Event(Event::PlayerClosed)).unchanged())
    }
    fn input<E: Env + 'static>(&mut self, input: InputEvent) -> Effects {
        let action = match input {
            InputEvent::HoverEnter => Action::Visibility(ActionVisibility::HoverEnter),
            InputEvent::HoverLeave => Action::Visibility(ActionVisibility::HoverLeave),
            InputEvent::Click | InputEvent::KeyActivate => {
                Action::Playback(ActionPlayback::TogglePlay)
            }
        };
        self.update_controls::<E>(&Msg::Action(action))
    }
    fn update_controls<E: Env + 'static>(&mut self, msg: &Msg) -> Effects {
        if !self.lifecycle.is_active() {
            return Effects::none().unchanged();
        }
        let playback_effects = update_playback::<E>(
            &mut self.playback,
            &mut self.last_error,
            self.player.as_ref(),
            self.attach_revision,
            msg,
        );
        let volume_effects = update_volume::<E>(
            &mut self.volume,
            &mut self.last_error,
            self.player.as_ref(),
            self.attach_revision,
            msg,
        );
        let tracks_effects = update_tracks::<E>(
            &mut self.tracks,
            &mut self.last_error,
            self.player.as_ref(),
            self.attach_revision,
            msg,
        );
        let visibility_effects =
            update_visibility::<E>(&mut self.visibility, self.attach_revision, msg);
        playback_effects
            .join(volume_effects)
            .join(tracks_effects)
            .join(visibility_effects)
    }
}

impl<E: Env + 'static> Update<E> for MediaControlSurface {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Surface(ActionSurface::Attach(config))) => {
                self.attach::<E>(config)
            }
            Msg::Action(Action::Surface(ActionSurface::Detach)) => self.detach(),
            Msg::Action(Action::Input(input)) => self.input::<E>(*input),
            Msg::Internal(Internal::PlayerCreateResult(revision, result)) => {
                self.player_create_result::<E>(*revision, result)
            }
            Msg::Internal(Internal::PlayerClosedResult(revision, result)) => {
                self.player_closed_result::<E>(*revision, result)
            }
            _ => self.update_controls::<E>(msg),
        }
    }
}
