//! Static scene description.
//!
//! The desktop computer model is a flat table of draw records, one per
//! primitive instance. Every record names the mesh it instances, its full
//! transform, its material color and which texture slot (if any) it samples.
//! The table is authored once at startup and never mutated.

/// Which primitive mesh a record instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    /// Unit quad in the XZ plane, normal +Y.
    Plane,
    /// Unit cube centered on the origin.
    Box,
}

/// Which loaded texture a record samples, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    /// Untextured; the fragment stage uses the record's color.
    None,
    /// Computer case material.
    Case,
    /// Brand logo decal.
    Logo,
}

/// One primitive instance in the scene.
#[derive(Debug, Clone)]
pub struct DrawRecord {
    pub label: &'static str,
    pub mesh: MeshKind,
    pub scale: [f32; 3],
    /// Rotation angle in degrees about `rotation_axis`.
    pub rotation_degrees: f32,
    pub rotation_axis: [f32; 3],
    pub translation: [f32; 3],
    /// RGBA material color, used when the texture slot is `None`.
    pub color: [f32; 4],
    pub texture: TextureSlot,
}

const FLOOR_COLOR: [f32; 4] = [0.3, 0.5, 0.30, 1.0];
const CASE_COLOR: [f32; 4] = [0.9, 0.9, 0.7, 1.0];
const KEYCAP_COLOR: [f32; 4] = [0.7, 0.7, 0.5, 1.0];
const SCREEN_COLOR: [f32; 4] = [0.0, 0.2, 0.0, 1.0];
const SLOT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const Y_AXIS: [f32; 3] = [0.0, 1.0, 0.0];
const X_AXIS: [f32; 3] = [1.0, 0.0, 0.0];

/// Keycaps sit on this plane above the keyboard body.
const KEY_ROW_Y: f32 = 1.0;
const KEY_SIZE: f32 = 0.25;

fn part(
    label: &'static str,
    mesh: MeshKind,
    scale: [f32; 3],
    translation: [f32; 3],
    color: [f32; 4],
) -> DrawRecord {
    DrawRecord {
        label,
        mesh,
        scale,
        rotation_degrees: 0.0,
        rotation_axis: Y_AXIS,
        translation,
        color,
        texture: TextureSlot::None,
    }
}

/// Square keycap.
fn key(label: &'static str, x: f32, z: f32) -> DrawRecord {
    part(
        label,
        MeshKind::Box,
        [KEY_SIZE, KEY_SIZE, KEY_SIZE],
        [x, KEY_ROW_Y, z],
        KEYCAP_COLOR,
    )
}

/// Modifier or other non-square keycap.
fn wide_key(label: &'static str, width: f32, x: f32, z: f32) -> DrawRecord {
    part(
        label,
        MeshKind::Box,
        [width, KEY_SIZE, KEY_SIZE],
        [x, KEY_ROW_Y, z],
        KEYCAP_COLOR,
    )
}

/// Build the full draw table for the desk scene.
///
/// Record order is draw order; the depth buffer makes it visually
/// irrelevant, but keeping it stable keeps frame traces comparable.
pub fn desk_scene() -> Vec<DrawRecord> {
    let mut records = Vec::with_capacity(68);

    records.push(DrawRecord {
        label: "floor",
        mesh: MeshKind::Plane,
        scale: [50.0, 50.0, 50.0],
        rotation_degrees: 0.0,
        rotation_axis: Y_AXIS,
        translation: [-1.5, 0.4, 3.0],
        color: FLOOR_COLOR,
        texture: TextureSlot::Case,
    });
    records.push(DrawRecord {
        label: "backdrop",
        mesh: MeshKind::Plane,
        scale: [50.0, 50.0, 50.0],
        rotation_degrees: 90.0,
        rotation_axis: X_AXIS,
        translation: [0.0, 0.0, -10.0],
        color: WHITE,
        texture: TextureSlot::Case,
    });

    records.push(part(
        "computer body",
        MeshKind::Box,
        [5.0, 5.0, 5.0],
        [0.0, 3.0, 0.0],
        CASE_COLOR,
    ));
    records.push(part(
        "monitor screen",
        MeshKind::Box,
        [4.0, 2.5, 0.2],
        [0.0, 3.5, 2.5],
        SCREEN_COLOR,
    ));
    records.push(part(
        "monitor bezel top",
        MeshKind::Box,
        [5.0, 0.5, 0.5],
        [0.0, 5.0, 2.5],
        CASE_COLOR,
    ));
    records.push(part(
        "monitor bezel right",
        MeshKind::Box,
        [0.5, 2.5, 0.5],
        [2.25, 3.5, 2.5],
        CASE_COLOR,
    ));
    records.push(part(
        "monitor bezel left",
        MeshKind::Box,
        [0.5, 2.5, 0.5],
        [-2.25, 3.5, 2.5],
        CASE_COLOR,
    ));
    records.push(part(
        "monitor bezel bottom",
        MeshKind::Box,
        [5.0, 1.0, 0.5],
        [0.0, 1.75, 2.5],
        CASE_COLOR,
    ));
    records.push(part(
        "floppy slot",
        MeshKind::Box,
        [1.5, 0.1, 1.0],
        [1.25, 1.75, 2.3],
        SLOT_COLOR,
    ));
    records.push(part(
        "brightness dial",
        MeshKind::Box,
        [0.5, 0.25, 1.0],
        [1.75, 1.75, 2.3],
        SLOT_COLOR,
    ));
    records.push(DrawRecord {
        label: "logo decal",
        mesh: MeshKind::Plane,
        scale: [0.2, 0.2, 0.2],
        rotation_degrees: 90.0,
        rotation_axis: X_AXIS,
        translation: [-1.75, 1.58, 2.76],
        color: WHITE,
        texture: TextureSlot::Logo,
    });
    records.push(part(
        "keyboard body",
        MeshKind::Box,
        [5.25, 0.5, 2.25],
        [0.15, 0.7, 5.75],
        CASE_COLOR,
    ));

    // Digit row.
    let z = 5.15;
    records.push(key("key `", -2.0, z));
    for (legend, x) in [
        ("key 1", -1.65),
        ("key 2", -1.30),
        ("key 3", -0.95),
        ("key 4", -0.60),
        ("key 5", -0.25),
        ("key 6", 0.1),
        ("key 7", 0.45),
        ("key 8", 0.80),
        ("key 9", 1.15),
        ("key 0", 1.5),
        ("key -", 1.85),
    ] {
        records.push(key(legend, x, z));
    }
    records.push(wide_key("key backspace", 0.375, 2.15, z));

    // Top letter row.
    let z = 5.5;
    records.push(wide_key("key tab", 0.375, -1.94, z));
    for (legend, x) in [
        ("key q", -1.55),
        ("key w", -1.25),
        ("key e", -0.9),
        ("key r", -0.55),
        ("key t", -0.20),
        ("key y", 0.15),
        ("key u", 0.5),
        ("key i", 0.85),
        ("key o", 1.2),
        ("key p", 1.55),
        ("key [", 1.9),
        ("key ]", 2.25),
    ] {
        records.push(key(legend, x, z));
    }

    // Home row.
    let z = 5.85;
    records.push(wide_key("key caps lock", 0.7, -1.78, z));
    records.push(wide_key("key a", 0.5, -1.52, z));
    for (legend, x) in [
        ("key s", -1.17),
        ("key d", -0.82),
        ("key d", -0.82),
        ("key f", -0.47),
        ("key g", -0.12),
        ("key h", 0.23),
        ("key j", 0.58),
        ("key k", 0.93),
        ("key l", 1.28),
        ("key ;", 1.63),
    ] {
        records.push(key(legend, x, z));
    }
    records.push(wide_key("key enter", 0.5, 2.15, z));

    // Bottom letter row.
    let z = 6.2;
    records.push(wide_key("key shift", 0.75, -1.75, z));
    for (legend, x) in [
        ("key z", -1.15),
        ("key x", -0.8),
        ("key c", -0.45),
        ("key v", -0.1),
        ("key b", 0.25),
        ("key n", 0.6),
        ("key m", 0.95),
        ("key m", 0.95),
        ("key ,", 1.3),
        ("key .", 1.65),
    ] {
        records.push(key(legend, x, z));
    }
    records.push(wide_key("key right shift", 0.75, 1.95, z));

    // Space row.
    let z = 6.55;
    records.push(key("key option", -1.5, z));
    records.push(wide_key("key command", 0.5, -1.05, z));
    records.push(wide_key("key space", 2.0, 0.25, z));
    records.push(wide_key("key right command", 0.5, 1.55, z));
    records.push(key("key right option", 2.0, z));

    records
}
