//! Projection and model-view matrix construction.
//!
//! Kept free of GPU types so the math is pure and testable: given the same
//! inputs these functions produce bit-identical matrices.
//!
//! Conventions:
//! - right-handed view space, camera looking down -Z
//! - wgpu clip space (0..1 depth), hence `perspective_rh`

use glam::{Mat4, Vec3};

/// Perspective projection parameters.
///
/// The matrix is rebuilt from the current viewport aspect every frame;
/// everything else stays fixed for the lifetime of the scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    /// Vertical field of view, radians.
    pub fov_y_radians: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_radians: 45f32.to_radians(),
            z_near: 0.1,
            z_far: 10000.0,
        }
    }
}

impl Projection {
    /// Builds the projection matrix for a width-over-height aspect ratio.
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, aspect, self.z_near, self.z_far)
    }
}

/// Model-view matrix for an object spinning in place in front of the camera.
///
/// Composed as `translation * rotation` (column-vector convention): vertices
/// are rotated about the view axis first, then pushed `distance` units away
/// from the camera. The object therefore spins at depth `-distance` instead
/// of orbiting a separate pivot.
pub fn model_view(distance: f32, angle_radians: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -distance)) * Mat4::from_rotation_z(angle_radians)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // ── model_view ────────────────────────────────────────────────────────

    #[test]
    fn model_view_at_zero_angle_is_pure_translation() {
        let m = model_view(6.0, 0.0);

        // Identity rotation block.
        assert_eq!(m.x_axis.to_array(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(m.y_axis.to_array(), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(m.z_axis.to_array(), [0.0, 0.0, 1.0, 0.0]);

        // Translation column.
        assert_eq!(m.w_axis.to_array(), [0.0, 0.0, -6.0, 1.0]);
    }

    #[test]
    fn model_view_rotation_block_matches_angle() {
        let angle = 1.25f32;
        let m = model_view(6.0, angle);
        let (s, c) = angle.sin_cos();

        assert!(approx(m.x_axis.x, c));
        assert!(approx(m.x_axis.y, s));
        assert!(approx(m.y_axis.x, -s));
        assert!(approx(m.y_axis.y, c));

        // Rotation about the view axis leaves depth alone.
        assert_eq!(m.z_axis.to_array(), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(m.w_axis.to_array(), [0.0, 0.0, -6.0, 1.0]);
    }

    #[test]
    fn model_view_is_deterministic() {
        let a = model_view(6.0, 0.7321);
        let b = model_view(6.0, 0.7321);
        assert_eq!(a.to_cols_array(), b.to_cols_array());
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn projection_defaults() {
        let p = Projection::default();
        assert!(approx(p.fov_y_radians, std::f32::consts::FRAC_PI_4));
        assert_eq!(p.z_near, 0.1);
        assert_eq!(p.z_far, 10000.0);
    }

    #[test]
    fn resize_changes_only_the_aspect_term() {
        let p = Projection::default();
        let a = p.matrix(4.0 / 3.0).to_cols_array();
        let b = p.matrix(16.0 / 9.0).to_cols_array();

        // Column-major: element 0 is the x-scale, the only aspect-dependent
        // entry of a perspective matrix.
        assert!(a[0] != b[0]);
        for i in 1..16 {
            assert_eq!(a[i], b[i], "entry {i} changed with aspect");
        }
    }

    #[test]
    fn projection_is_deterministic() {
        let p = Projection::default();
        assert_eq!(
            p.matrix(1.5).to_cols_array(),
            p.matrix(1.5).to_cols_array()
        );
    }
}
