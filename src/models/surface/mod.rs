mod error;
pub use error::*;

mod surface;
pub use surface::*;

mod update_playback;
pub use update_playback::*;

mod update_tracks;
pub use update_tracks::*;

mod update_visibility;
pub use update_visibility::*;

mod update_volume;
pub use update_volume::*;
