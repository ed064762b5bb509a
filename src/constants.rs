use std::time::Duration;

/// Quiet interval after the last hover-leave (or after mount) before the
/// control overlay is hidden.
pub const CONTROLS_HIDE_DELAY: Duration = Duration::from_millis(3000);

/// Volume used before the player reports anything and restored when no
/// previous volume has ever been recorded.
pub const DEFAULT_VOLUME: f64 = 1.0;
