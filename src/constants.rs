//! Scene and window constants.

/// Default window size, matching the original scene's framing.
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// Depth attachment format used by the render pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Perspective clip planes.
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Orthographic view volume half-extent (the O/P projection toggle).
pub const ORTHO_HALF_EXTENT: f32 = 5.0;

/// Initial camera placement, framing the desk from the front.
pub const CAMERA_START: [f32; 3] = [0.0, 3.0, 20.0];

/// Texture asset paths, relative to the working directory.
pub const CASE_TEXTURE_PATH: &str = "assets/case.png";
pub const LOGO_TEXTURE_PATH: &str = "assets/logo.png";

pub mod lighting {
    /// Global ambient term.
    pub const AMBIENT_STRENGTH: f32 = 0.9;
    pub const AMBIENT_COLOR: [f32; 3] = [0.2, 0.2, 0.2];

    /// Key light, above and to the right.
    pub const LIGHT1_COLOR: [f32; 3] = [0.2, 0.2, 0.2];
    pub const LIGHT1_POSITION: [f32; 3] = [2.0, 5.0, 5.0];

    /// Fill light, above and to the left.
    pub const LIGHT2_COLOR: [f32; 3] = [0.2, 0.2, 0.2];
    pub const LIGHT2_POSITION: [f32; 3] = [-2.0, 5.0, 5.0];

    pub const SPECULAR_INTENSITY_1: f32 = 0.1;
    pub const SPECULAR_INTENSITY_2: f32 = 0.0;
    pub const HIGHLIGHT_SIZE_1: f32 = 0.3;
    pub const HIGHLIGHT_SIZE_2: f32 = 0.3;
}
