use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

/// Idle spin per frame, radians (x, y).
pub const MESH_SPIN: Vec2 = Vec2::new(0.003, 0.005);
pub const STAR_SPIN: f32 = 0.0002;
/// Rotation the mesh reaches when the showcase section has fully scrolled past.
pub const SCRUB_TARGET: Vec2 = Vec2::new(PI * 2.0, PI * 4.0);

#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    pub mesh_rotation: Vec2,
    pub star_rotation: f32,
    scrub_from: Option<Vec2>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            mesh_rotation: Vec2::ZERO,
            star_rotation: 0.0,
            scrub_from: None,
        }
    }
}

impl SceneState {
    pub fn advance_frame(&mut self) {
        self.mesh_rotation += MESH_SPIN;
        self.star_rotation += STAR_SPIN;
    }

    /// Captures the current rotation as the start of the scroll scrub.
    pub fn bind_scrub(&mut self) {
        self.scrub_from = Some(self.mesh_rotation);
    }

    /// Sets the mesh rotation from scroll progress. Idle spin keeps adding
    /// on top until the next scroll update.
    pub fn scrub(&mut self, progress: f64) {
        let Some(from) = self.scrub_from else { return };
        self.mesh_rotation = from.lerp(SCRUB_TARGET, progress.clamp(0.0, 1.0) as f32);
    }

    pub fn mesh_transform(&self) -> Mat4 {
        Mat4::from_rotation_x(self.mesh_rotation.x) * Mat4::from_rotation_y(self.mesh_rotation.y)
    }

    pub fn star_transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.star_rotation)
    }
}

/// Colour channels in 0..=1.
pub type Rgb = Vec3;

pub fn rgb_from_hex(hex: u32) -> Rgb {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

pub fn css_rgb(color: Rgb) -> String {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    format!("rgb({}, {}, {})", c.x as u8, c.y as u8, c.z as u8)
}

pub struct Lighting {
    pub ambient: Rgb,
    pub light_position: Vec3,
    pub light_intensity: f32,
    pub shininess: f32,
}

impl Lighting {
    pub fn hero() -> Self {
        Self {
            ambient: rgb_from_hex(0x404040),
            light_position: Vec3::new(5.0, 5.0, 5.0),
            light_intensity: 1.0,
            shininess: 80.0,
        }
    }

    /// Blinn-Phong shade of a surface point with outward `normal`, seen from `eye`.
    pub fn shade(&self, base: Rgb, point: Vec3, normal: Vec3, eye: Vec3) -> Rgb {
        let n = normal.normalize_or_zero();
        let l = (self.light_position - point).normalize_or_zero();
        let v = (eye - point).normalize_or_zero();
        let diffuse = n.dot(l).max(0.0) * self.light_intensity;
        let half = (l + v).normalize_or_zero();
        let specular = if diffuse > 0.0 {
            n.dot(half).max(0.0).powf(self.shininess) * self.light_intensity
        } else {
            0.0
        };
        base * (self.ambient + Vec3::splat(diffuse)) + Vec3::splat(specular * 0.07)
    }
}
