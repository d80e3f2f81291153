//! Orientation basis and axis types.
//!
//! An [`OrthonormalBasis`] is the frame a host fits to a face selection,
//! handed to this crate as three axis vectors (or the equivalent rotation
//! matrix). The crate only ever reads it.

use nalgebra::{Matrix3, Matrix4, Rotation3, Vector3};

/// A principal axis of a local coordinate frame.
///
/// Indices are stable: X = 0, Y = 1, Z = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Local X axis (index 0).
    X,
    /// Local Y axis (index 1).
    Y,
    /// Local Z axis (index 2).
    Z,
}

impl Axis {
    /// The three axes in index order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Get the stable index of this axis (X = 0, Y = 1, Z = 2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Get the axis name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed world up direction `(0, 0, 1)`.
///
/// Axis scoring always measures against this direction; it is a system
/// constant, not a parameter.
#[must_use]
pub fn world_up() -> Vector3<f64> {
    Vector3::z()
}

/// A local coordinate frame given by three mutually orthogonal unit vectors.
///
/// The vectors are caller-supplied; consumers of this type normalize
/// defensively where drift matters but never mutate the basis itself.
/// The frame is assumed right-handed.
///
/// # Example
///
/// ```
/// use mesh_pivot::OrthonormalBasis;
/// use nalgebra::Vector3;
///
/// let basis = OrthonormalBasis::new(Vector3::x(), Vector3::y(), Vector3::z());
/// assert_eq!(basis.z, Vector3::z());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrthonormalBasis {
    /// Local X axis direction.
    pub x: Vector3<f64>,
    /// Local Y axis direction.
    pub y: Vector3<f64>,
    /// Local Z axis direction.
    pub z: Vector3<f64>,
}

impl Default for OrthonormalBasis {
    fn default() -> Self {
        Self::identity()
    }
}

impl OrthonormalBasis {
    /// Create a basis from three axis vectors.
    #[must_use]
    pub const fn new(x: Vector3<f64>, y: Vector3<f64>, z: Vector3<f64>) -> Self {
        Self { x, y, z }
    }

    /// The world-aligned identity frame.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Vector3::x(), Vector3::y(), Vector3::z())
    }

    /// Create a basis from the columns of a 3x3 orientation matrix.
    #[must_use]
    pub fn from_matrix3(matrix: &Matrix3<f64>) -> Self {
        Self::new(
            matrix.column(0).into_owned(),
            matrix.column(1).into_owned(),
            matrix.column(2).into_owned(),
        )
    }

    /// Create a basis from the upper-left 3x3 of a 4x4 transform matrix.
    ///
    /// Translation and the bottom row are ignored.
    #[must_use]
    pub fn from_matrix4(matrix: &Matrix4<f64>) -> Self {
        Self::from_matrix3(&matrix.fixed_view::<3, 3>(0, 0).into_owned())
    }

    /// Create a basis from the columns of a rotation.
    #[must_use]
    pub fn from_rotation(rotation: &Rotation3<f64>) -> Self {
        Self::from_matrix3(rotation.matrix())
    }

    /// Get an axis vector by [`Axis`].
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> Vector3<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// The basis as a 3x3 matrix with the axes as columns.
    #[must_use]
    pub fn to_matrix3(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.x, self.y, self.z])
    }

    /// The basis as a rotation.
    ///
    /// The matrix is taken as-is; callers are responsible for the basis
    /// actually being orthonormal and right-handed.
    #[must_use]
    pub fn to_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_matrix_unchecked(self.to_matrix3())
    }
}
