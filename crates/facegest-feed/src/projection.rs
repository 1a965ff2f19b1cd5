//! Face position → viewport projection.

use crate::profiles::CameraProfile;

/// Projects a camera-space position to a horizontal viewport coordinate.
///
/// Returns `None` when the projection is unavailable for this position.
pub trait ViewportProjector {
    fn viewport_x(&self, position: [f32; 3]) -> Option<f32>;
}

/// Pinhole camera at the origin looking down +z, x to the right, y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// tan(horizontal fov / 2)
    half_width_slope: f32,
}

impl PerspectiveCamera {
    pub fn new(vertical_fov_deg: f32, aspect_ratio: f32) -> Self {
        let half_height_slope = (vertical_fov_deg.to_radians() / 2.0).tan();
        Self {
            half_width_slope: aspect_ratio * half_height_slope,
        }
    }

    pub fn from_profile(profile: &CameraProfile) -> Self {
        Self::new(profile.vertical_fov_deg, profile.aspect_ratio)
    }
}

impl ViewportProjector for PerspectiveCamera {
    fn viewport_x(&self, [x, _y, z]: [f32; 3]) -> Option<f32> {
        if z <= 0.0 || self.half_width_slope <= 0.0 {
            return None;
        }
        let vx = 0.5 + 0.5 * x / (z * self.half_width_slope);
        vx.is_finite().then_some(vx)
    }
}

/// Projector that never has a viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoViewport;

impl ViewportProjector for NoViewport {
    fn viewport_x(&self, _position: [f32; 3]) -> Option<f32> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optical_axis_is_center() {
        let cam = PerspectiveCamera::new(60.0, 1.0);
        let vx = cam.viewport_x([0.0, 0.1, 0.4]).unwrap();
        assert!((vx - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_edge_of_frustum() {
        // 90° horizontal fov with aspect 1: x == z sits on the right edge.
        let cam = PerspectiveCamera::new(90.0, 1.0);
        let right = cam.viewport_x([0.5, 0.0, 0.5]).unwrap();
        let left = cam.viewport_x([-0.5, 0.0, 0.5]).unwrap();
        assert!((right - 1.0).abs() < 1e-5);
        assert!(left.abs() < 1e-5);
    }

    #[test]
    fn test_behind_camera_unavailable() {
        let cam = PerspectiveCamera::new(60.0, 0.75);
        assert!(cam.viewport_x([0.0, 0.0, 0.0]).is_none());
        assert!(cam.viewport_x([0.1, 0.0, -0.3]).is_none());
        assert!(cam.viewport_x([f32::NAN, 0.0, 0.3]).is_none());
    }

    #[test]
    fn test_from_profile() {
        let profile = CameraProfile {
            name: "t".into(),
            description: String::new(),
            vertical_fov_deg: 90.0,
            aspect_ratio: 2.0,
        };
        let cam = PerspectiveCamera::from_profile(&profile);
        let vx = cam.viewport_x([1.0, 0.0, 1.0]).unwrap();
        assert!((vx - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_no_viewport() {
        assert!(NoViewport.viewport_x([0.0, 0.0, 1.0]).is_none());
    }
}
