use glam::{Mat4, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

/// A point in canvas pixels plus its distance in front of the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f32,
}

impl Camera {
    pub fn hero(aspect: f32) -> Self {
        Self {
            fov_y_degrees: 60.0,
            aspect,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 4.0),
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        let projection = Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far);
        projection * Mat4::from_translation(-self.position)
    }

    /// Screen-space height of one world unit at `depth`, in pixels.
    pub fn pixels_per_unit(&self, depth: f32, viewport_height: f64) -> f64 {
        let half_fov = (self.fov_y_degrees.to_radians() / 2.0).tan();
        viewport_height / (2.0 * (half_fov * depth) as f64)
    }

    /// Projects `point` (already in world space) to canvas pixels. Points
    /// outside the near/far range come back as `None`.
    pub fn project(&self, view_projection: &Mat4, point: Vec3, width: f64, height: f64) -> Option<Projected> {
        let clip = *view_projection * point.extend(1.0);
        if clip.w < self.near || clip.w > self.far {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Projected {
            x: (ndc.x as f64 + 1.0) * 0.5 * width,
            y: (1.0 - ndc.y as f64) * 0.5 * height,
            depth: clip.w,
        })
    }
}
