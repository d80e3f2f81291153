//! Cursor Align — placement pipeline walkthrough
//!
//! Runs the pivot placement pipeline against a hand-built selection frame
//! under each option combination and prints the resulting cursor poses.

use mesh_pivot::{
    place_cursor, CursorPose, FrameSource, OrthonormalBasis, PivotResult, PlacementOptions,
    SelectionFrame, Transform3D,
};
use nalgebra::{Point3, Rotation3, Vector3};

/// Stand-in for a host's mesh layer: a pre-fitted selection frame.
struct DemoSelection {
    frame: SelectionFrame,
}

impl FrameSource for DemoSelection {
    fn selection_frame(&self) -> PivotResult<SelectionFrame> {
        Ok(self.frame)
    }
}

fn main() -> anyhow::Result<()> {
    println!("=== Cursor Align: pivot placement walkthrough ===");
    println!();

    // A face selection on a slanted surface: the fitted frame is the world
    // frame pitched 70 degrees about Y, so local X is nearly vertical.
    let pitch = 70.0_f64.to_radians();
    let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), pitch);
    let selection = DemoSelection {
        frame: SelectionFrame {
            center: Point3::new(0.5, 0.5, 0.0),
            basis: OrthonormalBasis::from_rotation(&rotation),
        },
    };

    // The object sits translated and uniformly scaled in the scene.
    let object_to_world =
        Transform3D::uniform_scale(2.0).then(&Transform3D::translation(10.0, 0.0, 1.0));

    let cursor = CursorPose::default();

    let combinations = [
        ("move only (addon defaults)", true, false),
        ("move + align to closest Z", true, true),
        ("reorient in place", false, false),
        ("reorient in place, aligned", false, true),
    ];

    for (label, move_cursor, align_to_closest_z) in combinations {
        let options = PlacementOptions {
            move_cursor,
            align_to_closest_z,
        };
        let placement = place_cursor(&selection, &object_to_world, &cursor, &options)?;

        println!("--- {label} ---");
        let loc = placement.cursor.location;
        println!("  location:    ({:.3}, {:.3}, {:.3})", loc.x, loc.y, loc.z);
        let (roll, pitch, yaw) = placement.cursor.orientation.euler_angles();
        println!(
            "  euler (deg): ({:.1}, {:.1}, {:.1})",
            roll.to_degrees(),
            pitch.to_degrees(),
            yaw.to_degrees()
        );
        if let Some(alignment) = placement.alignment {
            println!(
                "  aligned axis {} (scores: x={:.3}, y={:.3}, z={:.3})",
                alignment.axis, alignment.scores.x, alignment.scores.y, alignment.scores.z
            );
        }
        println!();
    }

    Ok(())
}
