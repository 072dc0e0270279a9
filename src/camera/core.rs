use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::options::ScreenOptions;
use crate::scene::SceneCameraData;

/// Virtual camera for the raymarch pass.
///
/// Owns position and orientation, the frustum parameters fixed at
/// initialization, and the cached view / inverse view matrices. The cache is
/// rebuilt synchronously by every mutation, so reads never see stale
/// matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub(super) position: Vec3,
    pub(super) look: Vec3,
    pub(super) up: Vec3,
    pub(super) width: u32,
    pub(super) height: u32,
    aspect_ratio: f32,
    near: f32,
    pub(super) far: f32,
    height_angle: f32,
    pub(super) view_plane_width: f32,
    pub(super) view_plane_height: f32,
    view: Mat4,
    pub(super) inverse_view: Mat4,
}

impl Camera {
    /// Build a camera from scene data and screen settings.
    ///
    /// Inputs are assumed valid (positive viewport, `0 < near < far`,
    /// `look` not parallel to `up`). Run [`ScreenOptions::validate`] and
    /// [`SceneCameraData::validate`] upstream; invalid values produce
    /// NaN/Inf rather than an error.
    #[must_use]
    pub fn new(data: &SceneCameraData, screen: &ScreenOptions) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            look: Vec3::NEG_Z,
            up: Vec3::Y,
            width: 1,
            height: 1,
            aspect_ratio: 1.0,
            near: 0.1,
            far: 1.0,
            height_angle: 0.0,
            view_plane_width: 0.0,
            view_plane_height: 0.0,
            view: Mat4::IDENTITY,
            inverse_view: Mat4::IDENTITY,
        };
        camera.initialize(data, screen);
        camera
    }

    /// Reset all state from scene data and screen settings.
    ///
    /// Viewport resizes go through here as well.
    pub fn initialize(
        &mut self,
        data: &SceneCameraData,
        screen: &ScreenOptions,
    ) {
        debug_assert!(
            screen.width > 0 && screen.height > 0,
            "viewport must be non-empty"
        );
        debug_assert!(
            data.look.cross(data.up).length_squared() > 0.0,
            "look and up must not be parallel"
        );

        self.width = screen.width;
        self.height = screen.height;
        self.aspect_ratio = self.width as f32 / self.height as f32;

        self.near = screen.near_plane;
        self.far = screen.far_plane;

        // Extents of the image plane placed at the far distance.
        self.height_angle = data.height_angle;
        self.view_plane_height =
            2.0 * self.far * (self.height_angle / 2.0).tan();
        self.view_plane_width = self.aspect_ratio * self.view_plane_height;

        self.look = data.look;
        self.position = data.position;
        self.up = data.up;

        self.compute_view_matrix();

        log::debug!(
            "camera initialized: {}x{} aspect={:.4} view_plane={:.4}x{:.4} near={} far={}",
            self.width,
            self.height,
            self.aspect_ratio,
            self.view_plane_width,
            self.view_plane_height,
            self.near,
            self.far,
        );
    }

    /// Rebuild the view and inverse view matrices from position, look and
    /// up.
    ///
    /// `up` is re-orthogonalized against `look` here each time and never
    /// written back.
    pub fn compute_view_matrix(&mut self) {
        let [u, v, w] = camera_basis(self.look, self.up);

        let translation = Mat4::from_translation(-self.position);
        // Rows of the rotation block are u, v, w.
        let rotation = Mat4::from_mat3(Mat3::from_cols(u, v, w).transpose());

        self.view = rotation * translation;
        self.inverse_view = self.view.inverse();

        log::trace!("view matrix recomputed for eye {}", self.position);
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Camera-to-world transform.
    #[must_use]
    pub fn inverse_view_matrix(&self) -> Mat4 {
        self.inverse_view
    }

    /// Orthonormal camera basis `[u, v, w]`; the camera looks down `-w`.
    #[must_use]
    pub fn basis(&self) -> [Vec3; 3] {
        camera_basis(self.look, self.up)
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Eye position as a homogeneous point (w = 1) for shader upload.
    #[must_use]
    pub fn position_homogeneous(&self) -> Vec4 {
        self.position.extend(1.0)
    }

    /// Current look vector, as rotated; not renormalized.
    #[must_use]
    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// Up hint as supplied by the scene.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Near clipping distance.
    #[must_use]
    pub fn near_plane(&self) -> f32 {
        self.near
    }

    /// Far clipping distance.
    #[must_use]
    pub fn far_plane(&self) -> f32 {
        self.far
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn height_angle(&self) -> f32 {
        self.height_angle
    }

    /// Viewport width / height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Image-plane width at the far distance.
    #[must_use]
    pub fn view_plane_width(&self) -> f32 {
        self.view_plane_width
    }

    /// Image-plane height at the far distance.
    #[must_use]
    pub fn view_plane_height(&self) -> f32 {
        self.view_plane_height
    }

    /// Viewport size in pixels as `(width, height)`.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Gram-Schmidt basis: `w = -look`, `v = up` with its `w` component
/// removed, `u = v × w`.
fn camera_basis(look: Vec3, up: Vec3) -> [Vec3; 3] {
    let w = -look.normalize();
    let v = (up - up.dot(w) * w).normalize();
    let u = v.cross(w);
    [u, v, w]
}
