//! Error taxonomy for the viewer.
//!
//! Shader and texture failures are one-time startup failures: they are
//! reported upward with their full diagnostics and abort the program rather
//! than degrading. The camera has no error states.

use std::path::PathBuf;

/// Shader program construction failures. Each variant carries the
/// implementation-provided diagnostic log verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("vertex stage compilation failed:\n{0}")]
    VertexCompilation(String),

    #[error("fragment stage compilation failed:\n{0}")]
    FragmentCompilation(String),

    #[error("program link failed:\n{0}")]
    Linking(String),
}

/// Texture loading failures, carrying the offending path.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to read texture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode texture {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Application-level failures: configuration and GPU acquisition.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to acquire GPU device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
}
