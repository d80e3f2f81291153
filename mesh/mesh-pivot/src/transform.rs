//! Object-to-world transform wrapper.

use nalgebra::{Matrix4, Point3, Rotation3, Vector3};

/// An affine 3D transformation represented as a 4x4 matrix.
///
/// This is the object-to-world transform the placement pipeline maps the
/// selection centroid through. Supports the usual constructors and
/// composition.
///
/// # Example
///
/// ```
/// use mesh_pivot::Transform3D;
/// use nalgebra::Point3;
///
/// let translate = Transform3D::translation(1.0, 2.0, 3.0);
/// let p = translate.transform_point(&Point3::origin());
/// assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    /// The 4x4 transformation matrix in column-major order.
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create a transformation from a 4x4 matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// The identity transformation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(tx, ty, tz)),
        }
    }

    /// Create a translation from a vector.
    #[must_use]
    pub fn from_translation(v: Vector3<f64>) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Create a uniform scaling transformation.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self {
            matrix: Matrix4::new_scaling(factor),
        }
    }

    /// Create a transformation from a rotation.
    #[must_use]
    pub fn from_rotation(rotation: &Rotation3<f64>) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Create a rotation around the X axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        Self::from_rotation(&Rotation3::from_axis_angle(&Vector3::x_axis(), angle))
    }

    /// Create a rotation around the Y axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        Self::from_rotation(&Rotation3::from_axis_angle(&Vector3::y_axis(), angle))
    }

    /// Create a rotation around the Z axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        Self::from_rotation(&Rotation3::from_axis_angle(&Vector3::z_axis(), angle))
    }

    /// Compose this transformation with another, applied after this one.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Apply the transformation to a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }

    /// Get the underlying 4x4 matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }
}
