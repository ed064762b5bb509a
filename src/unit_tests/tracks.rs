use crate::models::surface::{
    ControlRequest, ControlRequestError, MediaControlSurface, SurfaceError,
};
use crate::player::PlayerError;
use crate::runtime::msg::{Action, ActionSurface, ActionTracks};
use crate::runtime::Runtime;
use crate::unit_tests::{
    create_player_with, valid_config, PlayerRequest, TestEnv, TestPlayer, PLAYER_REQUESTS,
};
use std::sync::Arc;

fn player_with_tracks() -> Arc<TestPlayer> {
    Arc::new(TestPlayer {
        video_tracks: vec!["0".to_owned(), "1".to_owned()],
        ..Default::default()
    })
}

#[test]
fn selecting_a_known_track_switches_it() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    create_player_with(player_with_tracks());
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(MediaControlSurface::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(Action::Surface(ActionSurface::Attach(valid_config())));
    });
    TestEnv::run(|| {
        runtime.dispatch(Action::Tracks(ActionTracks::Select("1".to_owned())));
    });
    let surface = runtime.model().unwrap();
    assert_eq!(surface.tracks.selected, "1", "selection follows user intent");
    assert!(
        PLAYER_REQUESTS
            .read()
            .unwrap()
            .contains(&PlayerRequest::SwitchTrack("1".to_owned())),
        "switch request issued"
    );
}

#[test]
fn selecting_an_unknown_track_is_surfaced_as_an_error() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    create_player_with(player_with_tracks());
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(MediaControlSurface::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(Action::Surface(ActionSurface::Attach(valid_config())));
    });
    TestEnv::run(|| {
        runtime.dispatch(Action::Tracks(ActionTracks::Select("9".to_owned())));
    });
    let surface = runtime.model().unwrap();
    assert_eq!(surface.tracks.selected, "0", "selection unchanged");
    assert_eq!(
        surface.last_error.as_ref().map(|reported| &reported.error),
        Some(&SurfaceError::ControlRequest(
            ControlRequestError::UnknownTrack("9".to_owned())
        )),
        "desync surfaced, not swallowed"
    );
    assert!(
        !PLAYER_REQUESTS
            .read()
            .unwrap()
            .iter()
            .any(|request| matches!(request, PlayerRequest::SwitchTrack(_))),
        "no switch requested"
    );
}

#[test]
fn list_visibility_is_local_state_only() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    create_player_with(player_with_tracks());
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(MediaControlSurface::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(Action::Surface(ActionSurface::Attach(valid_config())));
    });
    TestEnv::run(|| {
        runtime.dispatch(Action::Tracks(ActionTracks::ToggleOpen));
    });
    assert!(runtime.model().unwrap().tracks.is_open, "list opened");
    TestEnv::run(|| {
        runtime.dispatch(Action::Tracks(ActionTracks::Close));
        runtime.dispatch(Action::Tracks(ActionTracks::Open));
    });
    assert!(runtime.model().unwrap().tracks.is_open, "list reopened");
    assert_eq!(
        PLAYER_REQUESTS.read().unwrap().len(),
        1,
        "only the instantiation reached the player"
    );
}

#[test]
fn duplicate_track_ids_are_deduplicated() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    create_player_with(Arc::new(TestPlayer {
        video_tracks: vec!["0".to_owned(), "0".to_owned(), "1".to_owned()],
        ..Default::default()
    }));
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(MediaControlSurface::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(Action::Surface(ActionSurface::Attach(valid_config())));
    });
    assert_eq!(
        runtime.model().unwrap().tracks.tracks,
        vec!["0".to_owned(), "1".to_owned()],
        "order-preserving deduplication"
    );
}

#[test]
fn rejected_switch_keeps_the_selection() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    create_player_with(Arc::new(TestPlayer {
        video_tracks: vec!["0".to_owned(), "1".to_owned()],
        fail_requests: true,
        ..Default::default()
    }));
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(MediaControlSurface::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(Action::Surface(ActionSurface::Attach(valid_config())));
    });
    TestEnv::run(|| {
        runtime.dispatch(Action::Tracks(ActionTracks::Select("1".to_owned())));
    });
    let surface = runtime.model().unwrap();
    assert_eq!(surface.tracks.selected, "1", "intent kept on rejection");
    assert_eq!(
        surface.last_error.as_ref().map(|reported| &reported.error),
        Some(&SurfaceError::ControlRequest(ControlRequestError::Rejected(
            ControlRequest::SwitchTrack,
            PlayerError::Request("switch-track".to_owned()),
        ))),
        "rejection reported out-of-band"
    );
}
