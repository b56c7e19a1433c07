//! Primitive meshes.
//!
//! Two unit primitives cover the whole scene: an XZ plane and a cube, both
//! centered on the origin and sized for per-record scaling. Geometry is
//! authored on the CPU and uploaded once.

use super::vertex::{vertex, Vertex};
use crate::scene::MeshKind;
use wgpu::util::DeviceExt;

/// Unit quad in the XZ plane with a +Y normal.
pub const PLANE_VERTICES: [Vertex; 4] = [
    vertex([-0.5, 0.0, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    vertex([0.5, 0.0, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    vertex([0.5, 0.0, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    vertex([-0.5, 0.0, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
];

pub const PLANE_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Unit cube, four vertices per face so normals stay flat.
pub const BOX_VERTICES: [Vertex; 24] = [
    // +Z
    vertex([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    vertex([0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
    vertex([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    vertex([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
    // -Z
    vertex([0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    vertex([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
    vertex([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    vertex([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
    // +X
    vertex([0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
    vertex([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    vertex([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    vertex([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    // -X
    vertex([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    vertex([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    vertex([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    vertex([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    // +Y
    vertex([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    vertex([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    vertex([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    vertex([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
    // -Y
    vertex([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    vertex([0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    vertex([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
    vertex([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
];

pub const BOX_INDICES: [u16; 36] = [
    0, 1, 2, 2, 3, 0, // +Z
    4, 5, 6, 6, 7, 4, // -Z
    8, 9, 10, 10, 11, 8, // +X
    12, 13, 14, 14, 15, 12, // -X
    16, 17, 18, 18, 19, 16, // +Y
    20, 21, 22, 22, 23, 20, // -Y
];

/// An uploaded mesh ready to draw.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    pub fn upload(
        device: &wgpu::Device,
        label: &str,
        vertices: &[Vertex],
        indices: &[u16],
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vertices")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} indices")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    pub fn for_kind(device: &wgpu::Device, kind: MeshKind) -> Self {
        match kind {
            MeshKind::Plane => Self::upload(device, "plane", &PLANE_VERTICES, &PLANE_INDICES),
            MeshKind::Box => Self::upload(device, "box", &BOX_VERTICES, &BOX_INDICES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn all_normals_are_unit_axis_aligned() {
        for v in PLANE_VERTICES.iter().chain(BOX_VERTICES.iter()) {
            assert!((length(v.normal) - 1.0).abs() < 1e-6);
            let axis_components = v.normal.iter().filter(|c| c.abs() > 0.0).count();
            assert_eq!(axis_components, 1, "normal {:?} not axis aligned", v.normal);
        }
    }

    #[test]
    fn indices_stay_in_bounds() {
        for &i in &PLANE_INDICES {
            assert!((i as usize) < PLANE_VERTICES.len());
        }
        for &i in &BOX_INDICES {
            assert!((i as usize) < BOX_VERTICES.len());
        }
    }

    #[test]
    fn box_face_normals_match_face_positions() {
        // Each face's vertices sit on the plane its normal points out of.
        for v in &BOX_VERTICES {
            let [nx, ny, nz] = v.normal;
            let [px, py, pz] = v.position;
            let along = nx * px + ny * py + nz * pz;
            assert!((along - 0.5).abs() < 1e-6, "vertex {v:?} off its face");
        }
    }

    #[test]
    fn primitives_are_unit_sized() {
        for v in PLANE_VERTICES.iter().chain(BOX_VERTICES.iter()) {
            for c in v.position {
                assert!(c.abs() <= 0.5 + 1e-6);
            }
        }
    }
}
