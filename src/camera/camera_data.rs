//! Camera data structures - pure data, no methods.
//!
//! All transformations happen in camera_operations.rs

use cgmath::{Point3, Vector3};

/// Fly-camera state. Angles are stored in degrees.
#[derive(Debug, Clone, Copy)]
pub struct CameraData {
    /// Camera position in world space
    pub position: Point3<f32>,

    /// Constant reference "up" direction (+Y)
    pub world_up: Vector3<f32>,

    /// Derived look direction, unit length
    pub front: Vector3<f32>,

    /// Derived up vector, unit length
    pub up: Vector3<f32>,

    /// Derived right vector, unit length
    pub right: Vector3<f32>,

    /// Yaw angle (degrees, around world up)
    pub yaw: f32,

    /// Pitch angle (degrees, around the right axis)
    pub pitch: f32,

    /// Movement speed (world units per second)
    pub movement_speed: f32,

    /// Mouse look sensitivity (degrees per pixel)
    pub mouse_sensitivity: f32,

    /// Vertical field of view (degrees), driven by the scroll wheel
    pub zoom: f32,
}

/// Discrete movement directions fed by the keyboard handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch is clamped inside this bound to avoid gimbal flip
pub const PITCH_LIMIT: f32 = 89.0;

/// Zoom (vertical FOV) bounds in degrees
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;

impl Default for CameraData {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            world_up: Vector3::new(0.0, 1.0, 0.0),
            // Derived vectors for yaw -90 / pitch 0; kept consistent by
            // camera_operations::update_basis_vectors after any rotation.
            front: Vector3::new(0.0, 0.0, -1.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            right: Vector3::new(1.0, 0.0, 0.0),
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        }
    }
}
