// Tile field generation.
//
// Points are laid out on a golden-angle (Fibonacci) spiral: the polar angle
// is evenly spaced in cosine so every tile covers roughly the same area, and
// the azimuth advances by `sqrt(n * PI)` per unit of polar angle so adjacent
// rows do not line up into visible bands.

use crate::config::GalleryConfig;
use glam::DVec3;
use std::f64::consts::PI;

/// One image-bearing tile. `base` is assigned at creation and never mutated;
/// every frame rotates a copy of it.
#[derive(Clone, Debug)]
pub struct Tile {
    pub index: usize,
    pub base: DVec3,
    pub image_url: String,
}

#[inline]
pub fn fibonacci_point(index: usize, count: usize, radius: f64) -> DVec3 {
    let n = count as f64;
    let phi = (-1.0 + (2.0 * index as f64) / n).acos();
    let theta = (n * PI).sqrt() * phi;
    DVec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

pub fn fibonacci_points(count: usize, radius: f64) -> Vec<DVec3> {
    (0..count)
        .map(|i| fibonacci_point(i, count, radius))
        .collect()
}

pub fn generate_tiles(config: &GalleryConfig) -> Vec<Tile> {
    fibonacci_points(config.image_count, config.radius)
        .into_iter()
        .enumerate()
        .map(|(index, base)| Tile {
            index,
            base,
            image_url: config.image_url(index),
        })
        .collect()
}
