//! Orthographic camera and overlay projection.

use glam::{DMat4, DVec2};
use serde::{Deserialize, Serialize};
use stv_core::{Scalar, Vec3};

/// Overlay labels closer than this to the right or bottom edge are hidden.
pub const OVERLAY_MARGIN: Scalar = 40.0;

/// An orthographic camera whose frustum is `frustum_size` tall and
/// `frustum_size · aspect` wide, shrunk by `zoom`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrthographicCamera {
    pub frustum_size: Scalar,
    pub aspect: Scalar,
    pub zoom: Scalar,
    pub near: Scalar,
    pub far: Scalar,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for OrthographicCamera {
    /// Top-down view: 50 units tall, zoom 4.1, from (0, 10, 0).
    fn default() -> Self {
        Self {
            frustum_size: 50.0,
            aspect: 1.0,
            zoom: 4.1,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(0.0, 10.0, 0.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl OrthographicCamera {
    pub fn looking_at(frustum_size: Scalar, zoom: Scalar, position: Vec3, target: Vec3) -> Self {
        Self { frustum_size, zoom, position, target, ..Self::default() }
    }

    /// Refits the frustum to a viewport; zero-height viewports keep the
    /// previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as Scalar / height as Scalar;
        }
    }

    /// Half extents `(half_width, half_height)` of the visible region.
    pub fn half_extents(&self) -> (Scalar, Scalar) {
        let h = self.frustum_size / 2.0 / self.zoom;
        (h * self.aspect, h)
    }

    /// Up vector actually used by the view; when `up` is parallel to the view
    /// direction a perpendicular fallback is chosen (−Z, or X for views along Z).
    fn view_up(&self) -> Vec3 {
        let dir = self.target - self.position;
        if dir.cross(self.up).length_squared() > 1e-12 * dir.length_squared().max(1.0) {
            self.up
        } else if self.up.z.abs() < 0.5 {
            Vec3::NEG_Z
        } else {
            Vec3::X
        }
    }

    pub fn view(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.target, self.view_up())
    }

    pub fn projection(&self) -> DMat4 {
        let (w, h) = self.half_extents();
        DMat4::orthographic_rh_gl(-w, w, -h, h, self.near, self.far)
    }

    /// World point to normalised device coordinates (x, y in [−1, 1] when visible).
    pub fn project(&self, world: Vec3) -> Vec3 {
        (self.projection() * self.view()).project_point3(world)
    }

    /// Pixel position of a world point in a `width × height` overlay, or `None`
    /// when it falls within [`OVERLAY_MARGIN`] of the right or bottom edge.
    pub fn overlay_position(&self, world: Vec3, width: u32, height: u32) -> Option<DVec2> {
        ndc_to_overlay(self.project(world), width, height)
    }
}

/// NDC to overlay pixels (origin top-left, y down).
pub fn ndc_to_overlay(ndc: Vec3, width: u32, height: u32) -> Option<DVec2> {
    let (w, h) = (width as Scalar, height as Scalar);
    let v = DVec2::new((ndc.x + 1.0) * w / 2.0, -(ndc.y - 1.0) * h / 2.0);
    if v.x >= w - OVERLAY_MARGIN || v.y >= h - OVERLAY_MARGIN {
        None
    } else {
        Some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_down_view_puts_negative_z_up() {
        let mut cam = OrthographicCamera::default();
        cam.resize(800, 800);
        let (w, _) = cam.half_extents();
        let centre = cam.project(Vec3::ZERO);
        assert!(centre.x.abs() < 1e-9 && centre.y.abs() < 1e-9);
        let right = cam.project(Vec3::new(w, 0.0, 0.0));
        let up = cam.project(Vec3::new(0.0, 0.0, -w));
        assert!((right.x - 1.0).abs() < 1e-9 && right.y.abs() < 1e-9, "{right:?}");
        assert!((up.y - 1.0).abs() < 1e-9 && up.x.abs() < 1e-9, "{up:?}");
    }

    #[test]
    fn resize_widens_frustum() {
        let mut cam = OrthographicCamera::default();
        cam.resize(1600, 800);
        let (w, h) = cam.half_extents();
        assert!((w - 2.0 * h).abs() < 1e-12);
        cam.resize(100, 0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn overlay_maps_centre_and_hides_margins() {
        assert_eq!(ndc_to_overlay(Vec3::ZERO, 800, 600), Some(DVec2::new(400.0, 300.0)));
        assert_eq!(ndc_to_overlay(Vec3::new(-1.0, 1.0, 0.0), 800, 600), Some(DVec2::ZERO));
        assert_eq!(ndc_to_overlay(Vec3::new(0.95, 0.0, 0.0), 800, 600), None);
        assert_eq!(ndc_to_overlay(Vec3::new(0.0, -0.9, 0.0), 800, 600), None);
    }
}
