//! Generates the great-circle trace of a plane and projects it with
//! hemisphere folding disabled, the way a plotting client would before
//! clipping against the primitive circle.

use stereonet::circle::great_circle;
use stereonet::{EqualArea, Plane, SphericalProjection};

fn main() -> stereonet::Result<()> {
    let plane = Plane::new(215.0, 47.0);
    let trace = great_circle(plane.pole(), 37)?;

    let projection = EqualArea::without_folding();
    let projected = projection.project_batch(&trace);

    println!("great circle of plane {}/{}", plane.dip_direction, plane.dip);
    for (point, (x, y)) in trace.iter().zip(&projected) {
        let inside = (x * x + y * y).sqrt() <= 1.0;
        println!(
            "({:>7.4}, {:>7.4}, {:>7.4}) -> ({:>7.4}, {:>7.4}) {}",
            point.x,
            point.y,
            point.z,
            x,
            y,
            if inside { "" } else { "clip" }
        );
    }

    Ok(())
}
