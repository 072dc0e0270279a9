//! Camera motion: translation, directional impulses and mouse-look
//! rotation.
//!
//! The impulse queries are pure; callers decide how to combine them and
//! hand the sum to [`Camera::apply_translation`]. Rotation generators build
//! a matrix and hand it to [`Camera::apply_rotation`].

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

use super::core::Camera;

/// Scale applied to look-relative movement impulses.
pub const MOVE_SENSITIVITY: f32 = 0.75;
/// Fraction of a full turn produced by dragging across the whole viewport.
pub const LOOK_SENSITIVITY: f32 = 0.3;

/// Movement directions an input device can request.
///
/// Serde serializes as `snake_case` strings so keybinding tables read
/// naturally:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "forward"
/// Space = "up"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Along `look`.
    Forward,
    /// Against `look`.
    Backward,
    /// Against `look × up`.
    Left,
    /// Along `look × up`.
    Right,
    /// World +Y.
    Up,
    /// World -Y.
    Down,
}

impl MoveDirection {
    /// Every direction, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];
}

impl Camera {
    /// Move the eye by `displacement` and rebuild the view matrix.
    pub fn apply_translation(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.compute_view_matrix();
    }

    /// Displacement for moving forward.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        MOVE_SENSITIVITY * self.look
    }

    /// Displacement for moving backward.
    #[must_use]
    pub fn backward(&self) -> Vec3 {
        -MOVE_SENSITIVITY * self.look
    }

    /// Displacement for strafing left.
    #[must_use]
    pub fn strafe_left(&self) -> Vec3 {
        -MOVE_SENSITIVITY * self.look.cross(self.up)
    }

    /// Displacement for strafing right.
    #[must_use]
    pub fn strafe_right(&self) -> Vec3 {
        MOVE_SENSITIVITY * self.look.cross(self.up)
    }

    /// Displacement for rising along world +Y. Not sensitivity-scaled.
    #[must_use]
    pub fn ascend(&self) -> Vec3 {
        Vec3::Y
    }

    /// Displacement for sinking along world -Y. Not sensitivity-scaled.
    #[must_use]
    pub fn descend(&self) -> Vec3 {
        Vec3::NEG_Y
    }

    /// Displacement for `direction`, dispatching to the queries above.
    #[must_use]
    pub fn impulse(&self, direction: MoveDirection) -> Vec3 {
        match direction {
            MoveDirection::Forward => self.forward(),
            MoveDirection::Backward => self.backward(),
            MoveDirection::Left => self.strafe_left(),
            MoveDirection::Right => self.strafe_right(),
            MoveDirection::Up => self.ascend(),
            MoveDirection::Down => self.descend(),
        }
    }

    /// Rotate `look` by `rotation` and rebuild the view matrix.
    ///
    /// `up` is left alone; the next view-matrix derivation
    /// re-orthogonalizes it.
    pub fn apply_rotation(&mut self, rotation: Mat3) {
        self.look = rotation * self.look;
        self.compute_view_matrix();
    }

    /// Rotation about world +Y for a horizontal pointer delta.
    #[must_use]
    pub fn yaw_rotation(&self, delta_x: f32) -> Mat3 {
        let angle = LOOK_SENSITIVITY * 360.0 * delta_x / self.width as f32;
        let (sin, cos) = angle.to_radians().sin_cos();
        Mat3::from_cols(
            Vec3::new(cos, 0.0, -sin),
            Vec3::Y,
            Vec3::new(sin, 0.0, cos),
        )
    }

    /// Rotation about `look × up` for a vertical pointer delta.
    ///
    /// The axis is used as-is, not normalized, so the effective angle
    /// scales with `|look × up|`.
    #[must_use]
    pub fn pitch_rotation(&self, delta_y: f32) -> Mat3 {
        let angle = LOOK_SENSITIVITY * 360.0 * delta_y / self.height as f32;
        let (sin, cos) = angle.to_radians().sin_cos();
        let axis = self.look.cross(self.up);
        // Laid out so that `k * x == x × axis`.
        let k = Mat3::from_cols(
            Vec3::new(0.0, -axis.z, axis.y),
            Vec3::new(axis.z, 0.0, -axis.x),
            Vec3::new(-axis.y, axis.x, 0.0),
        );
        Mat3::IDENTITY + k * sin + (k * k) * (1.0 - cos)
    }

    /// Turn horizontally by a pointer delta.
    pub fn yaw(&mut self, delta_x: f32) {
        let rotation = self.yaw_rotation(delta_x);
        self.apply_rotation(rotation);
    }

    /// Tilt vertically by a pointer delta.
    pub fn pitch(&mut self, delta_y: f32) {
        let rotation = self.pitch_rotation(delta_y);
        self.apply_rotation(rotation);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;
    use crate::options::ScreenOptions;
    use crate::scene::SceneCameraData;

    const EPS: f32 = 1e-5;

    fn camera(look: Vec3) -> Camera {
        Camera::new(
            &SceneCameraData {
                position: Vec3::new(0.0, 0.0, 5.0),
                look,
                up: Vec3::Y,
                height_angle: 45.0_f32.to_radians(),
            },
            &ScreenOptions {
                width: 800,
                height: 600,
                near_plane: 0.1,
                far_plane: 100.0,
            },
        )
    }

    #[test]
    fn translation_moves_eye_and_view() {
        let mut cam = camera(Vec3::new(0.2, -0.1, -1.0));
        let old = cam.position();
        let d = Vec3::new(1.0, -2.0, 0.5);
        cam.apply_translation(d);
        assert_eq!(cam.position(), old + d);
        let local = cam.view_matrix() * (old + d).extend(1.0);
        assert!(local.abs_diff_eq(Vec4::W, EPS));
    }

    #[test]
    fn impulses_match_table() {
        let cam = camera(Vec3::NEG_Z);
        assert_eq!(cam.forward(), Vec3::new(0.0, 0.0, -0.75));
        assert_eq!(cam.backward(), Vec3::new(0.0, 0.0, 0.75));
        assert!(cam.strafe_right().abs_diff_eq(Vec3::X * 0.75, EPS));
        assert!(cam.strafe_left().abs_diff_eq(Vec3::X * -0.75, EPS));
        assert_eq!(cam.ascend(), Vec3::Y);
        assert_eq!(cam.descend(), Vec3::NEG_Y);
    }

    #[test]
    fn impulses_are_pure() {
        let cam = camera(Vec3::new(1.0, 0.0, -1.0));
        let before = cam.clone();
        for dir in MoveDirection::ALL {
            let _ = cam.impulse(dir);
        }
        assert_eq!(cam, before);
    }

    #[test]
    fn impulse_scales_with_unnormalized_look() {
        let cam = camera(Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(
            cam.impulse(MoveDirection::Forward),
            Vec3::new(0.0, 0.0, -1.5)
        );
    }

    #[test]
    fn zero_yaw_is_identity() {
        let mut cam = camera(Vec3::new(0.3, -0.2, -1.0));
        let look = cam.look();
        cam.yaw(0.0);
        assert_eq!(cam.look(), look);
    }

    #[test]
    fn yaw_turns_about_world_y() {
        let mut cam = camera(Vec3::NEG_Z);
        // 0.3 * 360 * 200 / 800 = 27 degrees.
        cam.yaw(200.0);
        let theta = 27.0_f32.to_radians();
        let expected = Vec3::new(-theta.sin(), 0.0, -theta.cos());
        assert!(cam.look().abs_diff_eq(expected, EPS));
        assert_eq!(cam.up(), Vec3::Y);
    }

    #[test]
    fn yaw_rotation_is_orthogonal() {
        let cam = camera(Vec3::NEG_Z);
        let r = cam.yaw_rotation(123.0);
        assert!((r * r.transpose()).abs_diff_eq(Mat3::IDENTITY, EPS));
        assert!((r.determinant() - 1.0).abs() < EPS);
    }

    #[test]
    fn pitch_with_unit_axis_tilts_down() {
        let mut cam = camera(Vec3::NEG_Z);
        // 0.3 * 360 * 50 / 600 = 9 degrees, axis = +X.
        cam.pitch(50.0);
        let theta = 9.0_f32.to_radians();
        let expected = Vec3::new(0.0, -theta.sin(), -theta.cos());
        assert!(cam.look().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn pitch_keeps_unnormalized_axis_magnitude() {
        let mut cam = camera(Vec3::new(0.0, 0.0, -2.0));
        cam.pitch(50.0);
        let (s, c) = 9.0_f32.to_radians().sin_cos();
        // axis = (2, 0, 0); K look = (0, -4, 0), K^2 look = (0, 0, 8).
        let expected = Vec3::new(0.0, -4.0 * s, -2.0 + 8.0 * (1.0 - c));
        assert!(cam.look().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn rotation_keeps_basis_orthonormal() {
        let mut cam = camera(Vec3::NEG_Z);
        for _ in 0..20 {
            cam.yaw(37.0);
            cam.pitch(-11.0);
        }
        let [u, v, w] = cam.basis();
        assert!(u.dot(v).abs() < 1e-4);
        assert!(v.dot(w).abs() < 1e-4);
        assert!(u.dot(w).abs() < 1e-4);
        let product = cam.inverse_view_matrix() * cam.view_matrix();
        assert!(product.abs_diff_eq(glam::Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn direction_serializes_snake_case() {
        let json = serde_json::to_string(&MoveDirection::Forward).unwrap();
        assert_eq!(json, "\"forward\"");
    }
}
