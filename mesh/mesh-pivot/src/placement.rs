//! Cursor placement pipeline.
//!
//! The boundary between the pure axis-alignment core and a host editor.
//! All host-owned state (the current cursor, the active object's world
//! transform) enters as parameters and leaves in the returned [`Placement`];
//! nothing here touches host state directly.

use nalgebra::{Point3, UnitQuaternion};
use tracing::info;

use crate::align::{axis_to_up_rotation, closest_axis_to_up, AxisAlignment};
use crate::basis::OrthonormalBasis;
use crate::cursor::CursorPose;
use crate::error::PivotResult;
use crate::transform::Transform3D;

/// An orientation frame fitted to a face selection, in object space.
///
/// This is the contract a [`FrameSource`] fulfills: the selection's centroid
/// plus a best-fit orthonormal basis. How the frame is computed (normal
/// averaging, a host orientation operator) is the host's business.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionFrame {
    /// Centroid of the selected faces, object space.
    pub center: Point3<f64>,
    /// Best-fit orientation basis for the selection.
    pub basis: OrthonormalBasis,
}

/// Collaborator that produces an orientation frame from the current
/// selection.
///
/// Hosts implement this over their editable-mesh representation. The
/// placement pipeline only calls [`selection_frame`](Self::selection_frame)
/// and propagates its errors untouched.
pub trait FrameSource {
    /// Fit a frame to the currently selected faces.
    ///
    /// # Errors
    ///
    /// - [`PivotError::EmptySelection`](crate::PivotError::EmptySelection)
    ///   if nothing is selected.
    /// - [`PivotError::FrameUnavailable`](crate::PivotError::FrameUnavailable)
    ///   if a basis cannot be fitted to the selection.
    fn selection_frame(&self) -> PivotResult<SelectionFrame>;
}

/// Options controlling cursor placement.
///
/// Mirrors the addon's two user-facing toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementOptions {
    /// Move the cursor to the selection centroid. When off, the cursor
    /// keeps its location but its orientation is still updated.
    pub move_cursor: bool,
    /// Rotate the frame so its axis closest to world up takes over the
    /// local-Z role. When off, the fitted basis orientation is used as-is.
    pub align_to_closest_z: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            move_cursor: true,
            align_to_closest_z: false,
        }
    }
}

/// Result of a placement: the new cursor pose plus alignment diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// The cursor pose to write back into the scene.
    pub cursor: CursorPose,
    /// Axis choice and scores, present exactly when
    /// [`PlacementOptions::align_to_closest_z`] was set.
    pub alignment: Option<AxisAlignment>,
}

/// Place the cursor from the current selection.
///
/// Obtains a [`SelectionFrame`] from `source`, then runs
/// [`place_from_frame`] on it.
///
/// # Errors
///
/// Propagates `source` errors untouched, plus any error from
/// [`place_from_frame`].
///
/// # Example
///
/// ```
/// use mesh_pivot::{
///     place_cursor, CursorPose, FrameSource, OrthonormalBasis, PivotResult,
///     PlacementOptions, SelectionFrame, Transform3D,
/// };
/// use nalgebra::Point3;
///
/// struct FixedFrame(SelectionFrame);
///
/// impl FrameSource for FixedFrame {
///     fn selection_frame(&self) -> PivotResult<SelectionFrame> {
///         Ok(self.0)
///     }
/// }
///
/// let source = FixedFrame(SelectionFrame {
///     center: Point3::new(1.0, 0.0, 0.0),
///     basis: OrthonormalBasis::identity(),
/// });
/// let placement = place_cursor(
///     &source,
///     &Transform3D::identity(),
///     &CursorPose::default(),
///     &PlacementOptions::default(),
/// )?;
/// assert_eq!(placement.cursor.location, Point3::new(1.0, 0.0, 0.0));
/// # Ok::<(), mesh_pivot::PivotError>(())
/// ```
pub fn place_cursor(
    source: &impl FrameSource,
    object_to_world: &Transform3D,
    cursor: &CursorPose,
    options: &PlacementOptions,
) -> PivotResult<Placement> {
    let frame = source.selection_frame()?;
    place_from_frame(&frame, object_to_world, cursor, options)
}

/// Place the cursor from an already-fitted selection frame.
///
/// The frame's centroid is mapped through `object_to_world` when
/// [`PlacementOptions::move_cursor`] is set; otherwise the incoming cursor
/// location is kept. With [`PlacementOptions::align_to_closest_z`] the
/// closest-axis rotation is composed onto the basis; otherwise the basis
/// orientation is taken as-is. The orientation is updated in either case.
///
/// # Errors
///
/// Returns [`PivotError::DegenerateAxis`](crate::PivotError::DegenerateAxis)
/// if alignment is requested and a basis axis cannot be normalized.
pub fn place_from_frame(
    frame: &SelectionFrame,
    object_to_world: &Transform3D,
    cursor: &CursorPose,
    options: &PlacementOptions,
) -> PivotResult<Placement> {
    let location = if options.move_cursor {
        object_to_world.transform_point(&frame.center)
    } else {
        cursor.location
    };

    let (orientation, alignment) = if options.align_to_closest_z {
        let alignment = closest_axis_to_up(&frame.basis)?;
        let rotation = frame.basis.to_rotation() * axis_to_up_rotation(alignment.axis);
        (
            UnitQuaternion::from_rotation_matrix(&rotation),
            Some(alignment),
        )
    } else {
        (
            UnitQuaternion::from_rotation_matrix(&frame.basis.to_rotation()),
            None,
        )
    };

    info!(
        moved = options.move_cursor,
        aligned = options.align_to_closest_z,
        axis = alignment.map(|a| a.axis.as_str()),
        "Placed cursor from selection frame"
    );

    Ok(Placement {
        cursor: CursorPose::new(location, orientation),
        alignment,
    })
}
