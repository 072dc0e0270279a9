use super::core::Camera;
use crate::options::RenderOptions;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding everything the raymarch shader reads from the
/// camera.
pub struct CameraUniform {
    /// World-to-camera matrix.
    pub view: [[f32; 4]; 4],
    /// Camera-to-world matrix, for rebuilding rays in the shader.
    pub inverse_view: [[f32; 4]; 4],
    /// Eye position with w = 1.
    pub position: [f32; 4],
    /// Near clipping distance.
    pub near: f32,
    /// Far clipping distance.
    pub far: f32,
    /// Image-plane width at the far distance.
    pub view_plane_width: f32,
    /// Image-plane height at the far distance.
    pub view_plane_height: f32,
    /// Viewport size in pixels.
    pub viewport: [u32; 2],
    /// Packed [`RenderOptions::flags`].
    pub render_flags: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: u32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices and an origin eye.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: glam::Mat4::IDENTITY.to_cols_array_2d(),
            inverse_view: glam::Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0, 0.0, 0.0, 1.0],
            near: 0.1,
            far: 100.0,
            view_plane_width: 0.0,
            view_plane_height: 0.0,
            viewport: [1, 1],
            render_flags: 0,
            _pad: 0,
        }
    }

    /// Snapshot the camera's current state.
    #[must_use]
    pub fn from_camera(camera: &Camera, render: &RenderOptions) -> Self {
        let mut uniform = Self::new();
        uniform.update(camera, render);
        uniform
    }

    /// Refresh fields from the camera's current state.
    pub fn update(&mut self, camera: &Camera, render: &RenderOptions) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.inverse_view = camera.inverse_view_matrix().to_cols_array_2d();
        self.position = camera.position_homogeneous().to_array();
        self.near = camera.near_plane();
        self.far = camera.far_plane();
        self.view_plane_width = camera.view_plane_width();
        self.view_plane_height = camera.view_plane_height();
        let (width, height) = camera.viewport();
        self.viewport = [width, height];
        self.render_flags = render.flags();
    }

    /// Raw bytes for a uniform buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
