use serde::{Deserialize, Serialize};

/// Host input events, abstracted away from any particular event system.
///
/// The surface routes hover events to the control visibility and
/// click/key activation to the playback toggle.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum InputEvent {
    HoverEnter,
    HoverLeave,
    Click,
    KeyActivate,
}
