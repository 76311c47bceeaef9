use anyhow::Result;
use quickhull2::hull2::{Hull2, HullCfg, Point2, Winding};
use serde::{Deserialize, Serialize};

/// JSON body written by `cli hull`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HullReport {
    pub input_count: usize,
    pub count: usize,
    pub winding: String,
    pub signed_area: f64,
    pub vertices: Vec<[f64; 2]>,
    pub indices: Vec<usize>,
}

impl HullReport {
    /// Empty report for inputs without a hull (fewer than two distinct points).
    fn no_hull(input_count: usize) -> Self {
        Self {
            input_count,
            count: 0,
            winding: "none".to_string(),
            signed_area: 0.0,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }
}

pub fn build_report(points: &[Point2], cfg: HullCfg, ccw: bool) -> Result<HullReport> {
    let Some(hull) = Hull2::compute(points, cfg)? else {
        tracing::warn!(n = points.len(), "no_hull");
        return Ok(HullReport::no_hull(points.len()));
    };
    let hull = if ccw { hull.to_ccw() } else { hull };
    let winding = match hull.winding() {
        Winding::Clockwise => "cw",
        Winding::CounterClockwise => "ccw",
        Winding::Degenerate => "degenerate",
    };
    Ok(HullReport {
        input_count: points.len(),
        count: hull.len(),
        winding: winding.to_string(),
        signed_area: hull.signed_area(),
        vertices: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
        indices: hull.indices().to_vec(),
    })
}
