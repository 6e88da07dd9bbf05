use std::time::{SystemTime, UNIX_EPOCH};

use cgmath::{EuclideanSpace, Point2, Point3};

use rand::Rng;

pub mod triangle;

pub use triangle::Triangle;

///
/// Chaos game over a triangle. Every step moves the working point halfway towards a uniformly
/// chosen vertex and yields the new position.
///
pub struct ChaosGame<'a, R: Rng + ?Sized> {
    triangle: Triangle,
    point: Point2<f32>,
    generator: &'a mut R,
}

impl<'a, R: Rng + ?Sized> ChaosGame<'a, R> {
    pub fn new(triangle: Triangle, seed: Point2<f32>, generator: &'a mut R) -> Self {
        Self {
            triangle,
            point: seed,
            generator,
        }
    }
}

impl<'a, R: Rng + ?Sized> Iterator for ChaosGame<'a, R> {
    type Item = Point2<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.triangle.vertices[self.generator.gen_range(0..3)];
        self.point = self.point.midpoint(vertex);

        Some(self.point)
    }
}

///
/// Points of a Sierpinski gasket: the three triangle vertices followed by `iterations`
/// chaos game steps started from `seed`. All points lie in the z = 0 plane.
///
pub fn generate<R: Rng + ?Sized>(
    iterations: usize,
    triangle: &Triangle,
    seed: Point2<f32>,
    generator: &mut R,
) -> Vec<Point3<f32>> {
    let mut points = Vec::with_capacity(iterations + 3);

    points.extend(triangle.vertices.iter().map(|v| Point3::new(v.x, v.y, 0.0)));
    points.extend(
        ChaosGame::new(*triangle, seed, generator)
            .take(iterations)
            .map(|p| Point3::new(p.x, p.y, 0.0)),
    );

    log::debug!("generated {} gasket points", points.len());

    points
}

/// Tightly packed `x, y, z` floats, ready for a vertex buffer.
pub fn flatten(points: &[Point3<f32>]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
}

/// Seed derived from the wall clock, for runs that should differ from each other.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
