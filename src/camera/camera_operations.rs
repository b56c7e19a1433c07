//! Camera operations - pure functions over CameraData.
//!
//! All functions take data and return new data; no methods, no side effects.

use super::camera_data::{
    CameraData, MoveDirection, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN,
};
use cgmath::{InnerSpace, Matrix4, Point3, Vector3};

/// Initialize a camera at `position` with the default orientation
/// (yaw -90, pitch 0, looking down -Z).
pub fn init_camera(position: Point3<f32>) -> CameraData {
    update_basis_vectors(CameraData {
        position,
        ..Default::default()
    })
}

/// Initialize a camera with explicit yaw/pitch (degrees).
pub fn init_camera_oriented(position: Point3<f32>, yaw: f32, pitch: f32) -> CameraData {
    update_basis_vectors(CameraData {
        position,
        yaw,
        pitch,
        ..Default::default()
    })
}

/// Build the world-to-eye view matrix from the camera's position and basis.
/// Pure function of current state; callable any number of times per frame.
pub fn view_matrix(camera: &CameraData) -> Matrix4<f32> {
    Matrix4::look_at_rh(
        camera.position,
        camera.position + camera.front,
        camera.up,
    )
}

/// Displace the camera along its basis vectors. `delta_seconds` is the
/// wall-clock time since the previous frame; it is deliberately not clamped,
/// so a stalled frame produces a proportionally large jump.
pub fn process_keyboard(
    camera: &CameraData,
    direction: MoveDirection,
    delta_seconds: f32,
) -> CameraData {
    let velocity = camera.movement_speed * delta_seconds;
    let mut next = *camera;
    match direction {
        MoveDirection::Forward => next.position += camera.front * velocity,
        MoveDirection::Backward => next.position -= camera.front * velocity,
        MoveDirection::Left => next.position -= camera.right * velocity,
        MoveDirection::Right => next.position += camera.right * velocity,
        MoveDirection::Up => next.position += camera.world_up * velocity,
        MoveDirection::Down => next.position -= camera.world_up * velocity,
    }
    next
}

/// Apply a mouse-look delta in pixels. Offsets are scaled by the camera's
/// sensitivity and added to yaw/pitch; with `constrain_pitch` the pitch is
/// clamped to [-89, 89] degrees. The basis vectors are always recomputed.
pub fn process_mouse_movement(
    camera: &CameraData,
    xoffset: f32,
    yoffset: f32,
    constrain_pitch: bool,
) -> CameraData {
    let mut next = *camera;
    next.yaw += xoffset * camera.mouse_sensitivity;
    next.pitch += yoffset * camera.mouse_sensitivity;

    if constrain_pitch {
        next.pitch = next.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    update_basis_vectors(next)
}

/// Apply a scroll-wheel delta to the zoom (vertical FOV, degrees),
/// clamped to [1, 45].
pub fn process_mouse_scroll(camera: &CameraData, yoffset: f32) -> CameraData {
    let mut next = *camera;
    next.zoom = (next.zoom - yoffset).clamp(ZOOM_MIN, ZOOM_MAX);
    next
}

/// Recompute `front`, `right` and `up` from yaw/pitch via the standard
/// spherical-to-Cartesian conversion relative to `world_up`. The result is
/// a right-handed orthonormal basis.
pub fn update_basis_vectors(camera: CameraData) -> CameraData {
    let (yaw, pitch) = (camera.yaw.to_radians(), camera.pitch.to_radians());
    let front = Vector3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize();
    let right = front.cross(camera.world_up).normalize();
    let up = right.cross(front).normalize();

    CameraData {
        front,
        right,
        up,
        ..camera
    }
}
