//! Converts a small fault-plane dataset to poles and prints their projected
//! stereonet coordinates under both projection families.

use stereonet::coordinates::attitude::poles_of;
use stereonet::{EqualAngle, EqualArea, Plane, SphericalProjection};

fn main() {
    // Measurements from a hypothetical outcrop, dip direction / dip
    let planes = vec![
        Plane::new(90.0, 30.0),
        Plane::new(215.0, 47.0),
        Plane::new(310.0, 62.0),
        Plane::new(0.0, 80.0),
        Plane::new(145.0, 12.0),
    ];

    let poles = poles_of(&planes);

    let equal_area = EqualArea::new();
    let equal_angle = EqualAngle::new();

    println!("{:>12} {:>6}  {:>18}  {:>18}", "dip dir", "dip", "equal-area (X, Y)", "equal-angle (X, Y)");
    for (plane, pole) in planes.iter().zip(&poles) {
        let (ax, ay) = equal_area.project(*pole);
        let (gx, gy) = equal_angle.project(*pole);
        println!(
            "{:>12.1} {:>6.1}  ({:>7.4}, {:>7.4})  ({:>7.4}, {:>7.4})",
            plane.dip_direction, plane.dip, ax, ay, gx, gy
        );
    }

    // Read a picked screen coordinate back into an attitude
    let picked = equal_area.unproject(0.25, -0.4);
    let plane = stereonet::Plane::from_pole(picked);
    println!(
        "\npicked (0.25, -0.40) -> plane {:.1}/{:.1}",
        plane.dip_direction, plane.dip
    );
}
