//! Hull of a regular pentagon plus its centroid, printed in both windings.
//!
//! Usage:
//!   cargo run -p quickhull2 --example pentagon

use quickhull2::prelude::*;

fn main() -> Result<(), HullError> {
    let mut points: Vec<Point2> = (0..5)
        .map(|k| {
            let th = std::f64::consts::FRAC_PI_2 + k as f64 * std::f64::consts::TAU / 5.0;
            Vec2::new(th.cos(), th.sin())
        })
        .collect();
    points.push(Vec2::new(0.0, 0.0));

    let Some(hull) = Hull2::compute(&points, HullCfg::default())? else {
        println!("no hull");
        return Ok(());
    };
    println!("as built ({:?}): {:?}", hull.winding(), hull.indices());
    let ccw = hull.to_ccw();
    println!("ccw ({:?}): {:?}", ccw.winding(), ccw.indices());
    println!("area = {:.6}", ccw.signed_area());
    Ok(())
}
