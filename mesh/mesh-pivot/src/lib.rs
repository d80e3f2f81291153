//! Cursor pivot placement from mesh-face selections.
//!
//! This crate repositions and reorients a scene's 3D cursor from an
//! orientation frame fitted to the user's face selection, in the style of
//! Maya's pivot workflow. The core is the closest-axis heuristic: which
//! local axis of the fitted basis is most nearly parallel to world up, with
//! a deterministic tie-break, plus the fixed 90-degree rotation that hands
//! the local-Z role to that axis.
//!
//! - [`closest_axis_to_up`] / [`axis_to_up_rotation`] - the pure core.
//! - [`place_cursor`] / [`place_from_frame`] - the placement pipeline.
//! - [`FrameSource`] - collaborator trait a host implements over its mesh
//!   representation to supply the fitted [`SelectionFrame`].
//!
//! Everything is pure and synchronous: host state travels through
//! parameters and return values, never through globals.
//!
//! # Coordinate System
//!
//! Right-handed, Z up. World up is the fixed constant `(0, 0, 1)`; it is
//! not configurable.
//!
//! # Example
//!
//! ```
//! use mesh_pivot::{
//!     place_from_frame, Axis, CursorPose, OrthonormalBasis, PlacementOptions,
//!     SelectionFrame, Transform3D,
//! };
//! use nalgebra::{Point3, Vector3};
//!
//! // A frame tipped onto its side: local X points straight up.
//! let frame = SelectionFrame {
//!     center: Point3::new(0.5, 0.5, 0.0),
//!     basis: OrthonormalBasis::new(Vector3::z(), Vector3::y(), -Vector3::x()),
//! };
//!
//! let options = PlacementOptions {
//!     move_cursor: true,
//!     align_to_closest_z: true,
//! };
//! let placement = place_from_frame(
//!     &frame,
//!     &Transform3D::identity(),
//!     &CursorPose::default(),
//!     &options,
//! )?;
//!
//! assert_eq!(placement.alignment.unwrap().axis, Axis::X);
//! # Ok::<(), mesh_pivot::PivotError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod align;
mod basis;
mod cursor;
mod error;
mod placement;
mod transform;

pub use align::{axis_to_up_rotation, closest_axis_to_up, AxisAlignment, AxisScores, TIE_TOLERANCE};
pub use basis::{world_up, Axis, OrthonormalBasis};
pub use cursor::CursorPose;
pub use error::{PivotError, PivotResult};
pub use placement::{place_cursor, place_from_frame, FrameSource, Placement, PlacementOptions, SelectionFrame};
pub use transform::Transform3D;

// Re-export the nalgebra types appearing in the public API.
pub use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, UnitQuaternion, Vector3};
