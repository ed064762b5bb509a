use crate::models::surface::SurfaceError;
use serde::Serialize;
use url::Url;

///
/// Those messages are meant to be dispatched by this crate and handled by
/// its users.
///
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    /// The player instantiation resolved and the controls are live.
    PlayerCreated { endpoint: Url },
    /// The stream ended and the player handle was discarded.
    PlayerClosed,
    Error { error: SurfaceError },
}
