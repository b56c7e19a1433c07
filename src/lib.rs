//! Fly-camera viewer for a retro desktop computer scene.
//!
//! The scene is a static table of primitive instances (planes and boxes)
//! lit by two point lights plus an ambient term. A free-look camera flies
//! through it with WASD/QE, the mouse looks around, the scroll wheel zooms
//! and the O/P keys switch between orthographic and perspective projection.

pub mod app;
pub mod camera;
pub mod constants;
pub mod error;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod shader;

use error::ViewerError;

/// Window dimensions the surface cannot reasonably support.
const MIN_WINDOW_EDGE: (u32, u32) = (320, 240);
const MAX_WINDOW_EDGE: u32 = 16384;

/// Startup configuration.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "Retro Desk Viewer".to_string(),
            window_width: constants::WINDOW_WIDTH,
            window_height: constants::WINDOW_HEIGHT,
        }
    }
}

impl ViewerConfig {
    /// Reject window sizes no backend will accept before any GPU work
    /// starts.
    pub fn validate(&self) -> Result<(), ViewerError> {
        let (min_w, min_h) = MIN_WINDOW_EDGE;
        if self.window_width < min_w || self.window_height < min_h {
            return Err(ViewerError::InvalidConfig {
                field: "window size",
                value: format!("{}x{}", self.window_width, self.window_height),
                reason: "below 320x240 minimum",
            });
        }
        if self.window_width > MAX_WINDOW_EDGE || self.window_height > MAX_WINDOW_EDGE {
            return Err(ViewerError::InvalidConfig {
                field: "window size",
                value: format!("{}x{}", self.window_width, self.window_height),
                reason: "exceeds 16384 texture edge limit",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ViewerConfig::default().validate().is_ok());
    }

    #[test]
    fn tiny_window_is_rejected() {
        let config = ViewerConfig {
            window_width: 100,
            window_height: 100,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ViewerError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn oversized_window_is_rejected() {
        let config = ViewerConfig {
            window_width: 20000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn minimum_size_is_inclusive() {
        let config = ViewerConfig {
            window_width: 320,
            window_height: 240,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
