//! Coordinates for the twisted-ladder helix plot.

use std::f64::consts::PI;

use crate::helix::model::pair_color;

pub const HELIX_RADIUS: f64 = 2.0;
/// Total twist per base pair before spreading over the samples, in radians
pub const TWIST_PER_PAIR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A base pair drawn between the two backbones at one height
#[derive(Debug, Clone, PartialEq)]
pub struct Rung {
    pub start: Point3,
    pub end: Point3,
    pub color: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HelixGeometry {
    pub strand1: Vec<Point3>,
    pub strand2: Vec<Point3>,
    pub rungs: Vec<Rung>,
}

impl HelixGeometry {
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }
}

/// `n` evenly spaced samples from `start` to `stop`, both ends included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Build both backbones and the colored rungs for a list of base pair tags.
pub fn build_helix<T: AsRef<str>>(tags: &[T]) -> HelixGeometry {
    let n = tags.len();
    let angles = linspace(0.0, n as f64 * TWIST_PER_PAIR, n);
    let heights = linspace(0.0, n as f64, n);

    let mut geometry = HelixGeometry {
        strand1: Vec::with_capacity(n),
        strand2: Vec::with_capacity(n),
        rungs: Vec::with_capacity(n),
    };

    for ((tag, &t), &z) in tags.iter().zip(&angles).zip(&heights) {
        let p1 = Point3 {
            x: HELIX_RADIUS * t.cos(),
            y: HELIX_RADIUS * t.sin(),
            z,
        };
        let p2 = Point3 {
            x: HELIX_RADIUS * (t + PI).cos(),
            y: HELIX_RADIUS * (t + PI).sin(),
            z,
        };

        geometry.strand1.push(p1);
        geometry.strand2.push(p2);
        geometry.rungs.push(Rung {
            start: p1,
            end: p2,
            color: pair_color(tag.as_ref()),
            label: tag.as_ref().to_string(),
        });
    }

    geometry
}

/// Rotate a point about the helix axis by `yaw` radians and drop depth.
///
/// Returns `(horizontal, height)` for a side-on 2D plot.
pub fn project(point: &Point3, yaw: f64) -> (f64, f64) {
    (point.x * yaw.cos() - point.y * yaw.sin(), point.z)
}
