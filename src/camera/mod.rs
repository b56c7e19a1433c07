//! Camera module.
//!
//! Follows the data/operations split used across this crate:
//! - camera_data.rs: pure data structures with no methods
//! - camera_operations.rs: pure functions that operate on the data

pub mod camera_data;
pub mod camera_operations;

pub use camera_data::{CameraData, MoveDirection};

pub use camera_operations::{
    init_camera,
    init_camera_oriented,
    process_keyboard,
    process_mouse_movement,
    process_mouse_scroll,
    update_basis_vectors,
    view_matrix,
};
