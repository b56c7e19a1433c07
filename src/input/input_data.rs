//! Input state.

use crate::renderer::Projection;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Accumulated input between frames.
///
/// Window events mutate this as they arrive; once per frame the
/// accumulated motion is folded into the camera and the accumulators
/// reset. Key holds persist across frames, deltas do not.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    pub held: HashSet<KeyCode>,
    /// Last seen cursor position; `None` until the first motion event so
    /// the initial jump from window entry does not yank the camera.
    pub last_cursor: Option<(f64, f64)>,
    /// Mouse motion accumulated since the last frame, y already reversed
    /// so that moving the mouse up looks up.
    pub pending_mouse: (f32, f32),
    /// Scroll accumulated since the last frame, in lines.
    pub pending_scroll: f32,
    /// Active projection mode, toggled by the P and O keys.
    pub projection: Projection,
    /// Set by Escape; the event loop exits when it sees this.
    pub exit_requested: bool,
}
