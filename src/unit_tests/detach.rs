use crate::models::surface::{Lifecycle, MediaControlSurface};
use crate::player::{PlayerError, PlayerHandle, PlayerRef};
use crate::runtime::msg::{Action, ActionSurface};
use crate::runtime::{EnvFutureExt, Runtime};
use crate::unit_tests::{
    create_player_with, valid_config, TestEnv, TestPlayer, CREATE_PLAYER_HANDLER, PLAYER_REQUESTS,
};
use futures::channel::oneshot;
use futures::FutureExt;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[test]
fn detach_closes_the_player_exactly_once() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let player = Arc::new(TestPlayer::default());
    create_player_with(player.clone());
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(MediaControlSurface::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(Action::Surface(ActionSurface::Attach(valid_config())));
        runtime.dispatch(Action::Surface(ActionSurface::Detach));
        runtime.dispatch(Action::Surface(ActionSurface::Detach));
    });
    let surface = runtime.model().unwrap();
    assert_eq!(surface.lifecycle, Lifecycle::Detached, "surface detached");
    assert_eq!(
        player.close_count.load(Ordering::SeqCst),
        1,
        "close issued once despite repeated detach"
    );
}

#[test]
fn late_instantiation_success_after_detach_is_closed_and_swallowed() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let player = Arc::new(TestPlayer {
        video_tracks: vec!["0".to_owned()],
        ..Default::default()
    });
    let (create_tx, create_rx) = oneshot::channel::<Result<PlayerRef, PlayerError>>();
    *CREATE_PLAYER_HANDLER.write().unwrap() = {
        let create_rx = Mutex::new(Some(create_rx));
        Box::new(move |_| {
            create_rx
                .lock()
                .unwrap()
                .take()
                .expect("single instantiation")
                .map(|result| result.unwrap_or(Err(PlayerError::Connect("canceled".to_owned()))))
                .boxed_env()
        })
    };
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(MediaControlSurface::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(Action::Surface(ActionSurface::Attach(valid_config())));
        runtime.dispatch(Action::Surface(ActionSurface::Detach));
    });
    TestEnv::run(|| {
        let handle: Arc<dyn PlayerHandle> = player.clone();
        let _ = create_tx.send(Ok(PlayerRef::new(handle)));
    });
    let surface = runtime.model().unwrap();
    assert_eq!(surface.lifecycle, Lifecycle::Detached, "still detached");
    assert_eq!(surface.catalog(), None, "late handle not retained");
    assert!(
        surface.tracks.tracks.is_empty(),
        "late result never initializes state"
    );
    assert_eq!(
        player.close_count.load(Ordering::SeqCst),
        1,
        "late handle closed on arrival"
    );
}

#[test]
fn detach_cancels_the_hide_countdown() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    create_player_with(Arc::new(TestPlayer::default()));
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(MediaControlSurface::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(Action::Surface(ActionSurface::Attach(valid_config())));
        runtime.dispatch(Action::Surface(ActionSurface::Detach));
    });
    let requests_before = PLAYER_REQUESTS.read().unwrap().len();
    TestEnv::advance_time(Duration::from_millis(3001));
    let surface = runtime.model().unwrap();
    assert!(
        surface.visibility.visible,
        "no visibility mutation after detach"
    );
    assert_eq!(
        PLAYER_REQUESTS.read().unwrap().len(),
        requests_before,
        "no player calls after detach"
    );
}
