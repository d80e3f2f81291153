//! Closest-axis-to-up scoring and the fixed alignment rotations.
//!
//! Given an orientation basis, decide which of its axes is most nearly
//! parallel (or anti-parallel) to world up, then expose the fixed 90-degree
//! rotation that hands the local-Z role to that axis.

use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_2;

use nalgebra::{Rotation3, Vector3};
use tracing::debug;

use crate::basis::{world_up, Axis, OrthonormalBasis};
use crate::error::{PivotError, PivotResult};

/// Two scores closer than this are treated as tied.
pub const TIE_TOLERANCE: f64 = 0.001;

/// Per-axis alignment scores against world up.
///
/// Each score is the absolute dot product of the (normalized) axis with
/// `(0, 0, 1)`, so it lies in `[0, 1]`. Direction sign is deliberately
/// ignored: an axis pointing straight down scores the same as one pointing
/// straight up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisScores {
    /// Score for the local X axis.
    pub x: f64,
    /// Score for the local Y axis.
    pub y: f64,
    /// Score for the local Z axis.
    pub z: f64,
}

impl AxisScores {
    /// Get the score for an axis.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Result of the closest-axis decision: the chosen axis plus the raw scores
/// for diagnostic reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAlignment {
    /// The basis axis closest to world up after tie-breaking.
    pub axis: Axis,
    /// The three raw scores the decision was made from.
    pub scores: AxisScores,
}

/// Find the basis axis closest to world up.
///
/// Each axis is normalized independently before scoring, to tolerate
/// accumulated floating-point drift in a nominally orthonormal basis. Scores
/// are ranked descending with a stable sort, so exactly equal scores keep
/// the computation order X, Y, Z.
///
/// Tie-break: when the top two scores differ by less than [`TIE_TOLERANCE`],
/// a Z-versus-non-Z tie resolves to the non-Z axis (Z is the expected
/// vertical in most frames, so an ambiguous result favors exposing a
/// horizontal axis); any other tie keeps the first-ranked axis. Only the top
/// two ranked scores are ever compared; the third axis is not consulted even
/// when it falls within the tolerance of both.
///
/// # Errors
///
/// Returns [`PivotError::DegenerateAxis`] if any axis vector has
/// (near-)zero length and cannot be normalized.
///
/// # Example
///
/// ```
/// use mesh_pivot::{closest_axis_to_up, Axis, OrthonormalBasis};
/// use nalgebra::Vector3;
///
/// // Frame tipped onto its side: local X points straight up.
/// let basis = OrthonormalBasis::new(Vector3::z(), Vector3::y(), -Vector3::x());
/// let alignment = closest_axis_to_up(&basis)?;
/// assert_eq!(alignment.axis, Axis::X);
/// assert_eq!(alignment.scores.x, 1.0);
/// # Ok::<(), mesh_pivot::PivotError>(())
/// ```
pub fn closest_axis_to_up(basis: &OrthonormalBasis) -> PivotResult<AxisAlignment> {
    let up = world_up();

    let mut scores = [0.0_f64; 3];
    for axis in Axis::ALL {
        let unit = basis
            .axis(axis)
            .try_normalize(f64::EPSILON)
            .ok_or(PivotError::DegenerateAxis { axis })?;
        // |dot| of unit vectors can overshoot 1.0 by a few ulps.
        scores[axis.index()] = unit.dot(&up).abs().min(1.0);
    }

    let mut ranked: [(f64, Axis); 3] = [
        (scores[0], Axis::X),
        (scores[1], Axis::Y),
        (scores[2], Axis::Z),
    ];
    // Stable: equal scores keep X, Y, Z computation order.
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let (first, second) = (ranked[0], ranked[1]);
    let axis = if (first.0 - second.0).abs() < TIE_TOLERANCE {
        // Top-two comparison only; the third-ranked axis is never consulted.
        match (first.1, second.1) {
            (Axis::Z, other) => other,
            _ => first.1,
        }
    } else {
        first.1
    };

    let scores = AxisScores {
        x: scores[0],
        y: scores[1],
        z: scores[2],
    };

    debug!(
        axis = axis.as_str(),
        score_x = format!("{:.3}", scores.x),
        score_y = format!("{:.3}", scores.y),
        score_z = format!("{:.3}", scores.z),
        "Selected closest axis to world up"
    );

    Ok(AxisAlignment { axis, scores })
}

/// The fixed local rotation that moves an axis into the local-Z role.
///
/// Composed on the right of a basis rotation, the result is a frame whose
/// local Z is parallel to the chosen basis axis:
///
/// - `Axis::X`: -90 degrees about local Y (composed local Z is -X),
/// - `Axis::Y`: +90 degrees about local X (composed local Z is -Y),
/// - `Axis::Z`: identity.
///
/// The angles are the exact constant pi/2; the basis is assumed right-handed
/// and orthonormal. The sign of the composed Z is irrelevant to the scoring,
/// which only measures parallelism.
#[must_use]
pub fn axis_to_up_rotation(axis: Axis) -> Rotation3<f64> {
    match axis {
        Axis::X => Rotation3::from_axis_angle(&Vector3::y_axis(), -FRAC_PI_2),
        Axis::Y => Rotation3::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2),
        Axis::Z => Rotation3::identity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit vector whose dot with world up is exactly `s`.
    fn with_up_score(s: f64) -> Vector3<f64> {
        Vector3::new((1.0 - s * s).sqrt(), 0.0, s)
    }

    #[test]
    fn exact_match_wins_in_any_slot() {
        // Up in the X slot.
        let basis = OrthonormalBasis::new(Vector3::z(), Vector3::y(), -Vector3::x());
        let alignment = closest_axis_to_up(&basis).unwrap();
        assert_eq!(alignment.axis, Axis::X);
        assert_relative_eq!(alignment.scores.x, 1.0);
        assert_relative_eq!(alignment.scores.y, 0.0);
        assert_relative_eq!(alignment.scores.z, 0.0);

        // Up in the Y slot.
        let basis = OrthonormalBasis::new(Vector3::x(), Vector3::z(), -Vector3::y());
        assert_eq!(closest_axis_to_up(&basis).unwrap().axis, Axis::Y);

        // Pointing straight down scores the same as straight up.
        let basis = OrthonormalBasis::new(Vector3::x(), -Vector3::z(), Vector3::y());
        let alignment = closest_axis_to_up(&basis).unwrap();
        assert_eq!(alignment.axis, Axis::Y);
        assert_relative_eq!(alignment.scores.y, 1.0);
    }

    #[test]
    fn identity_basis_picks_z() {
        let alignment = closest_axis_to_up(&OrthonormalBasis::identity()).unwrap();
        assert_eq!(alignment.axis, Axis::Z);
        assert_relative_eq!(alignment.scores.z, 1.0);
    }

    #[test]
    fn clear_winner_needs_no_tie_break() {
        let basis = OrthonormalBasis::new(
            with_up_score(0.2),
            with_up_score(0.9),
            with_up_score(0.3),
        );
        assert_eq!(closest_axis_to_up(&basis).unwrap().axis, Axis::Y);
    }

    #[test]
    fn non_z_tie_keeps_first_ranked() {
        // Y ranks strictly above X but within the tolerance; Z is far below.
        // Descending stable sort puts Y first, so Y wins.
        let basis = OrthonormalBasis::new(
            with_up_score(0.9000),
            with_up_score(0.9005),
            with_up_score(0.1),
        );
        assert_eq!(closest_axis_to_up(&basis).unwrap().axis, Axis::Y);
    }

    #[test]
    fn exactly_equal_scores_keep_computation_order() {
        // X and Y score identically (same components, reordered); the
        // stable sort keeps X ahead of Y.
        let s = (1.0 - 0.9_f64 * 0.9).sqrt();
        let basis = OrthonormalBasis::new(
            Vector3::new(s, 0.0, 0.9),
            Vector3::new(0.0, s, 0.9),
            with_up_score(0.1),
        );
        assert_eq!(closest_axis_to_up(&basis).unwrap().axis, Axis::X);
    }

    #[test]
    fn z_loses_tie_to_non_z() {
        // Z ranks first, X second, within the tolerance: the non-Z axis wins.
        let basis = OrthonormalBasis::new(
            with_up_score(0.9505),
            with_up_score(0.1),
            with_up_score(0.9509),
        );
        let alignment = closest_axis_to_up(&basis).unwrap();
        assert_eq!(alignment.axis, Axis::X);

        // Symmetric case: X ranks first, Z second.
        let basis = OrthonormalBasis::new(
            with_up_score(0.9509),
            with_up_score(0.1),
            with_up_score(0.9505),
        );
        assert_eq!(closest_axis_to_up(&basis).unwrap().axis, Axis::X);
    }

    #[test]
    fn third_axis_never_joins_the_tie() {
        // All three scores within the tolerance of each other. Only the top
        // two are compared: Z first, Y second, so Y wins; X is not consulted.
        let basis = OrthonormalBasis::new(
            with_up_score(0.5770),
            Vector3::new(0.0, (1.0 - 0.5774_f64 * 0.5774).sqrt(), 0.5774),
            with_up_score(0.5778),
        );
        assert_eq!(closest_axis_to_up(&basis).unwrap().axis, Axis::Y);
    }

    #[test]
    fn near_unit_input_is_tolerated() {
        // Slightly drifted axis lengths still score correctly.
        let basis = OrthonormalBasis::new(
            Vector3::x() * 0.999_999,
            Vector3::y() * 1.000_001,
            Vector3::z() * 0.999_998,
        );
        let alignment = closest_axis_to_up(&basis).unwrap();
        assert_eq!(alignment.axis, Axis::Z);
        assert!(alignment.scores.z <= 1.0);
    }

    #[test]
    fn zero_axis_is_an_error() {
        let basis = OrthonormalBasis::new(Vector3::x(), Vector3::zeros(), Vector3::z());
        let err = closest_axis_to_up(&basis).unwrap_err();
        assert!(matches!(err, PivotError::DegenerateAxis { axis: Axis::Y }));
    }

    #[test]
    fn idempotent_on_identical_input() {
        let basis = OrthonormalBasis::new(
            with_up_score(0.3),
            with_up_score(0.8),
            with_up_score(0.5),
        );
        let a = closest_axis_to_up(&basis).unwrap();
        let b = closest_axis_to_up(&basis).unwrap();
        assert_eq!(a.axis, b.axis);
        assert_eq!(a.scores, b.scores);
    }

    #[test]
    fn fixed_rotations_hand_z_role_to_chosen_axis() {
        // X: composed local Z is the basis -X direction.
        let r = axis_to_up_rotation(Axis::X);
        assert_relative_eq!(r * Vector3::z(), -Vector3::x(), epsilon = 1e-12);

        // Y: composed local Z is the basis -Y direction.
        let r = axis_to_up_rotation(Axis::Y);
        assert_relative_eq!(r * Vector3::z(), -Vector3::y(), epsilon = 1e-12);

        // Z: no change needed.
        let r = axis_to_up_rotation(Axis::Z);
        assert_relative_eq!(r * Vector3::z(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn composed_frame_stays_a_proper_rotation() {
        for axis in Axis::ALL {
            let rotation = axis_to_up_rotation(axis);
            assert_relative_eq!(rotation.matrix().determinant(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn composition_with_tilted_basis() {
        // Frame whose X points up: composing the fixed rotation must produce
        // a local Z parallel to the original X (here, anti-parallel).
        let basis = OrthonormalBasis::new(Vector3::z(), Vector3::y(), -Vector3::x());
        let alignment = closest_axis_to_up(&basis).unwrap();
        let composed = basis.to_rotation() * axis_to_up_rotation(alignment.axis);
        let local_z = composed.matrix().column(2).into_owned();
        assert_relative_eq!(local_z, -basis.x, epsilon = 1e-6);
    }
}
