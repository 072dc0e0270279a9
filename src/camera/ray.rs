//! Per-pixel primary ray directions.
//!
//! Directions are world-space, unnormalized, and end on the far plane when
//! added to the eye position.

use glam::{Vec2, Vec3, Vec4};
use rayon::prelude::*;

use super::core::Camera;

impl Camera {
    /// Map a pixel center to image-plane coordinates in `[-0.5, 0.5]`.
    ///
    /// Row 0 is the top of the image; `y` grows upward.
    #[inline]
    #[must_use]
    pub fn normalize_pixel(&self, row: u32, col: u32) -> Vec2 {
        let width = self.width as f32;
        let height = self.height as f32;
        let x = (col as f32 + 0.5) / width - 0.5;
        let y = (height - 1.0 - row as f32 + 0.5) / height - 0.5;
        Vec2::new(x, y)
    }

    /// World-space direction through the center of pixel `(row, col)`.
    ///
    /// Returned as a homogeneous vector with `w = 0`. Does not touch camera
    /// state, so concurrent calls on a shared camera are fine.
    #[inline]
    #[must_use]
    pub fn ray_direction(&self, row: u32, col: u32) -> Vec4 {
        let p = self.normalize_pixel(row, col);
        let camera_space = Vec3::new(
            self.view_plane_width * p.x,
            self.view_plane_height * p.y,
            -self.far,
        );
        self.inverse_view
            .transform_vector3(camera_space)
            .extend(0.0)
    }

    /// Directions for every pixel, row-major, rows generated in parallel.
    #[must_use]
    pub fn ray_grid(&self) -> Vec<Vec4> {
        let width = self.width as usize;
        let mut rays = vec![Vec4::ZERO; width * self.height as usize];
        rays.par_chunks_mut(width.max(1))
            .enumerate()
            .for_each(|(row, line)| {
                for (col, ray) in line.iter_mut().enumerate() {
                    *ray = self.ray_direction(row as u32, col as u32);
                }
            });
        rays
    }
}
