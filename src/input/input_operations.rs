//! Input event handling and the per-frame camera update.

use super::input_data::InputState;
use crate::camera::{
    process_keyboard, process_mouse_movement, process_mouse_scroll, CameraData, MoveDirection,
};
use crate::renderer::Projection;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Scroll wheels reporting pixels instead of lines are scaled down to
/// roughly one line per notch.
const PIXELS_PER_LINE: f32 = 20.0;

pub fn handle_keyboard(state: &mut InputState, event: &KeyEvent) {
    let PhysicalKey::Code(code) = event.physical_key else {
        return;
    };
    match event.state {
        ElementState::Pressed => press(state, code),
        ElementState::Released => {
            state.held.remove(&code);
        }
    }
}

fn press(state: &mut InputState, code: KeyCode) {
    state.held.insert(code);
    match code {
        KeyCode::Escape => state.exit_requested = true,
        KeyCode::KeyO => state.projection = Projection::Orthographic,
        KeyCode::KeyP => state.projection = Projection::Perspective,
        _ => {}
    }
}

pub fn handle_cursor_moved(state: &mut InputState, x: f64, y: f64) {
    if let Some((last_x, last_y)) = state.last_cursor {
        state.pending_mouse.0 += (x - last_x) as f32;
        // Screen y grows downward; camera pitch grows upward.
        state.pending_mouse.1 += (last_y - y) as f32;
    }
    state.last_cursor = Some((x, y));
}

pub fn handle_scroll(state: &mut InputState, delta: MouseScrollDelta) {
    state.pending_scroll += match delta {
        MouseScrollDelta::LineDelta(_, lines) => lines,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
    };
}

/// Fold everything accumulated since the last frame into the camera and
/// clear the accumulators. Held keys apply continuously via `delta_seconds`.
pub fn apply(state: &mut InputState, camera: &CameraData, delta_seconds: f32) -> CameraData {
    let mut camera = *camera;

    for (code, direction) in [
        (KeyCode::KeyW, MoveDirection::Forward),
        (KeyCode::KeyS, MoveDirection::Backward),
        (KeyCode::KeyA, MoveDirection::Left),
        (KeyCode::KeyD, MoveDirection::Right),
        (KeyCode::KeyQ, MoveDirection::Up),
        (KeyCode::KeyE, MoveDirection::Down),
    ] {
        if state.held.contains(&code) {
            camera = process_keyboard(&camera, direction, delta_seconds);
        }
    }

    let (dx, dy) = std::mem::take(&mut state.pending_mouse);
    if dx != 0.0 || dy != 0.0 {
        camera = process_mouse_movement(&camera, dx, dy, true);
    }

    let scroll = std::mem::take(&mut state.pending_scroll);
    if scroll != 0.0 {
        camera = process_mouse_scroll(&camera, scroll);
    }

    camera
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::init_camera;
    use cgmath::Point3;

    // KeyEvent cannot be constructed outside winit, so tests enter through
    // press, the same function handle_keyboard dispatches to.

    #[test]
    fn first_cursor_event_only_latches() {
        let mut state = InputState::default();
        handle_cursor_moved(&mut state, 400.0, 300.0);
        assert_eq!(state.pending_mouse, (0.0, 0.0));
        assert_eq!(state.last_cursor, Some((400.0, 300.0)));
    }

    #[test]
    fn cursor_deltas_accumulate_with_reversed_y() {
        let mut state = InputState::default();
        handle_cursor_moved(&mut state, 400.0, 300.0);
        handle_cursor_moved(&mut state, 410.0, 310.0);
        // Moving the mouse down must pitch the camera down.
        assert_eq!(state.pending_mouse, (10.0, -10.0));
        handle_cursor_moved(&mut state, 415.0, 305.0);
        assert_eq!(state.pending_mouse, (15.0, -5.0));
    }

    #[test]
    fn held_key_moves_camera_each_frame() {
        let mut state = InputState::default();
        press(&mut state, KeyCode::KeyW);
        let camera = init_camera(Point3::new(0.0, 0.0, 10.0));
        let moved = apply(&mut state, &camera, 0.5);
        assert!(moved.position.z < camera.position.z);
        // Still held: a second frame keeps moving.
        let moved_again = apply(&mut state, &moved, 0.5);
        assert!(moved_again.position.z < moved.position.z);
    }

    #[test]
    fn apply_drains_mouse_and_scroll() {
        let mut state = InputState::default();
        handle_cursor_moved(&mut state, 0.0, 0.0);
        handle_cursor_moved(&mut state, 50.0, 0.0);
        handle_scroll(&mut state, MouseScrollDelta::LineDelta(0.0, 1.0));
        let camera = init_camera(Point3::new(0.0, 0.0, 0.0));
        let turned = apply(&mut state, &camera, 0.016);
        assert!(turned.yaw > camera.yaw);
        assert!(turned.zoom < camera.zoom);
        // Drained: applying again is a no-op.
        let settled = apply(&mut state, &turned, 0.016);
        assert_eq!(settled.yaw, turned.yaw);
        assert_eq!(settled.zoom, turned.zoom);
    }

    #[test]
    fn projection_toggles_follow_o_and_p() {
        let mut state = InputState::default();
        assert_eq!(state.projection, Projection::Perspective);
        press(&mut state, KeyCode::KeyO);
        assert_eq!(state.projection, Projection::Orthographic);
        press(&mut state, KeyCode::KeyP);
        assert_eq!(state.projection, Projection::Perspective);
    }

    #[test]
    fn key_release_stops_movement() {
        let mut state = InputState::default();
        let event_like_release = KeyCode::KeyW;
        press(&mut state, event_like_release);
        state.held.remove(&event_like_release);
        let camera = init_camera(Point3::new(0.0, 0.0, 10.0));
        let unmoved = apply(&mut state, &camera, 0.5);
        assert_eq!(unmoved.position, camera.position);
    }

    #[test]
    fn pixel_scroll_is_scaled_to_lines() {
        let mut state = InputState::default();
        handle_scroll(
            &mut state,
            MouseScrollDelta::PixelDelta(winit::dpi::PhysicalPosition::new(0.0, 40.0)),
        );
        assert!((state.pending_scroll - 2.0).abs() < 1e-6);
    }

    #[test]
    fn escape_requests_exit() {
        let mut state = InputState::default();
        press(&mut state, KeyCode::Escape);
        assert!(state.exit_requested);
    }
}
