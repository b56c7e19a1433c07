//! Pure transform math over draw records.

use super::scene_data::DrawRecord;
use cgmath::{Deg, InnerSpace, Matrix, Matrix4, SquareMatrix, Vector3};

/// Model matrix for a record: translation * rotation * scale.
pub fn model_matrix(record: &DrawRecord) -> Matrix4<f32> {
    let [sx, sy, sz] = record.scale;
    let scale = Matrix4::from_nonuniform_scale(sx, sy, sz);

    let axis = Vector3::from(record.rotation_axis);
    let rotation = if record.rotation_degrees == 0.0 {
        Matrix4::identity()
    } else {
        Matrix4::from_axis_angle(axis.normalize(), Deg(record.rotation_degrees))
    };

    let translation = Matrix4::from_translation(Vector3::from(record.translation));
    translation * rotation * scale
}

/// Normal matrix for a model matrix: transpose of the inverse.
///
/// Every scene transform has nonzero scale, so the inverse exists; the
/// identity fallback only guards against a degenerate hand-authored record.
pub fn normal_matrix(model: &Matrix4<f32>) -> Matrix4<f32> {
    model
        .invert()
        .unwrap_or_else(Matrix4::identity)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::scene_data::{desk_scene, MeshKind, TextureSlot};
    use cgmath::{vec4, Vector4};

    const EPS: f32 = 1e-5;

    fn assert_vec_eq(a: Vector4<f32>, b: Vector4<f32>) {
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() < EPS, "component {i}: {a:?} vs {b:?}");
        }
    }

    #[test]
    fn scene_has_expected_record_count() {
        assert_eq!(desk_scene().len(), 68);
    }

    #[test]
    fn scene_has_exactly_three_textured_records() {
        let records = desk_scene();
        let textured: Vec<_> = records
            .iter()
            .filter(|r| r.texture != TextureSlot::None)
            .collect();
        assert_eq!(textured.len(), 3);
        assert!(textured.iter().any(|r| r.texture == TextureSlot::Case));
        assert!(textured.iter().any(|r| r.texture == TextureSlot::Logo));
    }

    #[test]
    fn floor_samples_the_case_texture() {
        let records = desk_scene();
        let floor = records
            .iter()
            .find(|r| r.label == "floor")
            .expect("record present");
        assert_eq!(floor.texture, TextureSlot::Case);
    }

    #[test]
    fn planes_and_boxes_both_present() {
        let records = desk_scene();
        assert!(records.iter().any(|r| r.mesh == MeshKind::Plane));
        assert!(records.iter().any(|r| r.mesh == MeshKind::Box));
    }

    #[test]
    fn unrotated_record_composes_translation_and_scale() {
        let records = desk_scene();
        let body = records
            .iter()
            .find(|r| r.label == "computer body")
            .expect("record present");
        let m = model_matrix(body);
        // Unit-cube corner (0.5, 0.5, 0.5) lands at translation + scale/2.
        let corner = m * vec4(0.5, 0.5, 0.5, 1.0);
        assert_vec_eq(corner, vec4(2.5, 5.5, 2.5, 1.0));
    }

    #[test]
    fn backdrop_rotation_tilts_plane_upright() {
        let records = desk_scene();
        let backdrop = records
            .iter()
            .find(|r| r.label == "backdrop")
            .expect("record present");
        let n = normal_matrix(&model_matrix(backdrop));
        // The plane's +Y normal must face the camera (+Z) after the 90
        // degree rotation about X.
        let rotated = n * vec4(0.0, 1.0, 0.0, 0.0);
        let dir = rotated.truncate().normalize();
        assert!((dir.z.abs() - 1.0).abs() < EPS, "normal was {dir:?}");
        assert!(dir.y.abs() < EPS);
    }

    #[test]
    fn normal_matrix_is_inverse_transpose() {
        let records = desk_scene();
        let m = model_matrix(&records[0]);
        let n = normal_matrix(&m);
        let roundtrip = n.transpose() * m;
        for col in 0..4 {
            for row in 0..4 {
                let want = if col == row { 1.0 } else { 0.0 };
                assert!((roundtrip[col][row] - want).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn keycaps_share_material_and_height() {
        for record in desk_scene().iter().filter(|r| r.label.starts_with("key ")) {
            assert_eq!(record.translation[1], 1.0, "{}", record.label);
            assert_eq!(record.color, [0.7, 0.7, 0.5, 1.0], "{}", record.label);
            assert_eq!(record.mesh, MeshKind::Box, "{}", record.label);
        }
    }
}
