//! GPU uniform layouts and projection math.
//!
//! Layouts here mirror the uniform blocks in the WGSL sources field for
//! field; both sides must change together.

use crate::camera::{view_matrix, CameraData};
use crate::constants::{lighting, FAR_PLANE, NEAR_PLANE, ORTHO_HALF_EXTENT};
use crate::scene::{model_matrix, normal_matrix, DrawRecord, TextureSlot};
use bytemuck::{Pod, Zeroable};
use cgmath::{ortho, perspective, Deg, Matrix4};

/// Maps clip depth from OpenGL's [-1, 1] convention (which cgmath's
/// projection builders produce) to wgpu's [0, 1].
#[rustfmt::skip]
pub const OPENGL_TO_WGPU: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Which projection the viewer is currently using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

/// Build the projection matrix for the active mode.
///
/// Perspective uses the camera zoom as the vertical field of view;
/// orthographic ignores zoom and aspect and frames a fixed cube around
/// the model.
pub fn projection_matrix(projection: Projection, zoom_degrees: f32, aspect: f32) -> Matrix4<f32> {
    let gl_projection = match projection {
        Projection::Perspective => perspective(Deg(zoom_degrees), aspect, NEAR_PLANE, FAR_PLANE),
        Projection::Orthographic => ortho(
            -ORTHO_HALF_EXTENT,
            ORTHO_HALF_EXTENT,
            -ORTHO_HALF_EXTENT,
            ORTHO_HALF_EXTENT,
            NEAR_PLANE,
            FAR_PLANE,
        ),
    };
    OPENGL_TO_WGPU * gl_projection
}

/// Per-frame uniforms: camera matrices and the light rig.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// xyz = camera position.
    pub view_position: [f32; 4],
    /// rgb = ambient color, a = ambient strength.
    pub ambient_color: [f32; 4],
    pub light1_color: [f32; 4],
    pub light1_position: [f32; 4],
    pub light2_color: [f32; 4],
    pub light2_position: [f32; 4],
}

impl SceneUniforms {
    pub fn new(camera: &CameraData, projection: Projection, aspect: f32) -> Self {
        let [ar, ag, ab] = lighting::AMBIENT_COLOR;
        Self {
            view: view_matrix(camera).into(),
            projection: projection_matrix(projection, camera.zoom, aspect).into(),
            view_position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
            ambient_color: [ar, ag, ab, lighting::AMBIENT_STRENGTH],
            light1_color: xyz1(lighting::LIGHT1_COLOR),
            light1_position: xyz1(lighting::LIGHT1_POSITION),
            light2_color: xyz1(lighting::LIGHT2_COLOR),
            light2_position: xyz1(lighting::LIGHT2_POSITION),
        }
    }
}

/// Per-record uniforms, written once at startup into a dynamic-offset
/// buffer since the scene is static.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ModelUniforms {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub object_color: [f32; 4],
    pub specular_intensity1: f32,
    pub highlight_size1: f32,
    pub specular_intensity2: f32,
    pub highlight_size2: f32,
    pub has_texture: u32,
    pub _pad: [u32; 3],
}

impl ModelUniforms {
    pub fn from_record(record: &DrawRecord) -> Self {
        let model = model_matrix(record);
        let normal = normal_matrix(&model);
        Self {
            model: model.into(),
            normal_matrix: normal.into(),
            object_color: record.color,
            specular_intensity1: lighting::SPECULAR_INTENSITY_1,
            highlight_size1: lighting::HIGHLIGHT_SIZE_1,
            specular_intensity2: lighting::SPECULAR_INTENSITY_2,
            highlight_size2: lighting::HIGHLIGHT_SIZE_2,
            has_texture: (record.texture != TextureSlot::None) as u32,
            _pad: [0; 3],
        }
    }
}

fn xyz1(v: [f32; 3]) -> [f32; 4] {
    [v[0], v[1], v[2], 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::init_camera;
    use crate::scene::desk_scene;
    use cgmath::{vec4, Point3};

    #[test]
    fn uniform_sizes_match_wgsl_layouts() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 224);
        assert_eq!(std::mem::size_of::<ModelUniforms>(), 176);
    }

    fn ndc_depth(m: Matrix4<f32>, z: f32) -> f32 {
        let clip = m * vec4(0.0, 0.0, z, 1.0);
        clip.z / clip.w
    }

    #[test]
    fn perspective_depth_maps_to_unit_range() {
        let m = projection_matrix(Projection::Perspective, 45.0, 4.0 / 3.0);
        assert!(ndc_depth(m, -NEAR_PLANE).abs() < 1e-5);
        assert!((ndc_depth(m, -FAR_PLANE) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn orthographic_depth_maps_to_unit_range() {
        let m = projection_matrix(Projection::Orthographic, 45.0, 4.0 / 3.0);
        assert!(ndc_depth(m, -NEAR_PLANE).abs() < 1e-5);
        assert!((ndc_depth(m, -FAR_PLANE) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_narrows_the_frustum() {
        let wide = projection_matrix(Projection::Perspective, 45.0, 1.0);
        let tight = projection_matrix(Projection::Perspective, 10.0, 1.0);
        // Smaller fov scales x/y up: the same point lands further from center.
        let p = vec4(1.0, 0.0, -10.0, 1.0);
        let wide_x = (wide * p).x / (wide * p).w;
        let tight_x = (tight * p).x / (tight * p).w;
        assert!(tight_x > wide_x);
    }

    #[test]
    fn scene_uniforms_carry_camera_position() {
        let camera = init_camera(Point3::new(1.0, 2.0, 3.0));
        let u = SceneUniforms::new(&camera, Projection::Perspective, 1.0);
        assert_eq!(u.view_position, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.ambient_color[3], lighting::AMBIENT_STRENGTH);
    }

    #[test]
    fn textured_records_set_the_flag() {
        let records = desk_scene();
        let flags: Vec<u32> = records
            .iter()
            .map(|r| ModelUniforms::from_record(r).has_texture)
            .collect();
        assert_eq!(flags.iter().filter(|&&f| f == 1).count(), 3);
    }
}
