//! Scene cursor pose.

use nalgebra::{Point3, UnitQuaternion, Vector3};

/// The scene cursor's placement: a location and an orientation.
///
/// This is the value type the placement pipeline reads and returns; hosts
/// copy it into whatever their scene stores (location plus Euler angles,
/// typically). Orientation is carried as a unit quaternion; hosts needing
/// Euler angles read them off with [`UnitQuaternion::euler_angles`].
///
/// # Example
///
/// ```
/// use mesh_pivot::CursorPose;
/// use nalgebra::Point3;
///
/// let pose = CursorPose::default();
/// assert_eq!(pose.location, Point3::origin());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorPose {
    /// World-space location of the cursor.
    pub location: Point3<f64>,
    /// Orientation of the cursor frame.
    pub orientation: UnitQuaternion<f64>,
}

impl Default for CursorPose {
    fn default() -> Self {
        Self::identity()
    }
}

impl CursorPose {
    /// Create a pose from a location and an orientation.
    #[must_use]
    pub const fn new(location: Point3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            location,
            orientation,
        }
    }

    /// The world-origin pose with no rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            location: Point3::origin(),
            orientation: UnitQuaternion::identity(),
        }
    }

    /// The cursor frame's local X direction in world space.
    #[must_use]
    pub fn axis_x(&self) -> Vector3<f64> {
        self.orientation * Vector3::x()
    }

    /// The cursor frame's local Y direction in world space.
    #[must_use]
    pub fn axis_y(&self) -> Vector3<f64> {
        self.orientation * Vector3::y()
    }

    /// The cursor frame's local Z direction in world space.
    #[must_use]
    pub fn axis_z(&self) -> Vector3<f64> {
        self.orientation * Vector3::z()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn default_is_identity() {
        let pose = CursorPose::default();
        assert_eq!(pose.location, Point3::origin());
        assert_eq!(pose.orientation, UnitQuaternion::identity());
        assert_eq!(pose.axis_z(), Vector3::z());
    }

    #[test]
    fn local_axes_follow_orientation() {
        let orientation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        let pose = CursorPose::new(Point3::new(1.0, 2.0, 3.0), orientation);

        assert_relative_eq!(pose.axis_x(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(pose.axis_y(), -Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(pose.axis_z(), Vector3::z(), epsilon = 1e-12);
    }
}
