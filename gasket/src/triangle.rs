use cgmath::{InnerSpace, Point2, Vector3};

/// Bounding triangle of the chaos game.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Point2<f32>; 3],
}

impl Triangle {
    pub fn new(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    ///
    /// Barycentric coordinates `(u, v, w)` of `p` with respect to the vertices, in order.
    ///
    /// Collinear triangles have no barycentric frame, every component is NaN then.
    ///
    pub fn barycentric(&self, p: Point2<f32>) -> Vector3<f32> {
        let [a, b, c] = self.vertices;

        let v0 = b - a;
        let v1 = c - a;
        let v2 = p - a;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);

        let denom = d00 * d11 - d01 * d01;

        if denom == 0.0 {
            return Vector3::new(f32::NAN, f32::NAN, f32::NAN);
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;

        Vector3::new(1.0 - v - w, v, w)
    }

    /// Whether `p` lies inside or on the triangle, with `eps` slack on every coordinate.
    pub fn contains(&self, p: Point2<f32>, eps: f32) -> bool {
        let bary = self.barycentric(p);

        [bary.x, bary.y, bary.z]
            .iter()
            .all(|c| *c >= -eps && *c <= 1.0 + eps)
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(
            Point2::new(-0.5, -0.5),
            Point2::new(0.0, 0.5),
            Point2::new(0.5, -0.5),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barycentric_of_vertices() {
        let t = Triangle::default();

        assert_eq!(t.barycentric(t.vertices[0]), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(t.barycentric(t.vertices[1]), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(t.barycentric(t.vertices[2]), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn contains_test() {
        let t = Triangle::default();

        assert!(t.contains(Point2::new(0.0, 0.0), 0.0));
        assert!(t.contains(Point2::new(0.0, -0.5), 1e-6));
        assert!(!t.contains(Point2::new(0.0, 0.6), 1e-6));
        assert!(!t.contains(Point2::new(-0.5, 0.5), 1e-6));
    }

    #[test]
    fn collinear_contains_nothing() {
        let t = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        );

        assert!(!t.contains(Point2::new(1.0, 1.0), 1e-6));
    }
}
