use cgmath::{Deg, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4};

/// Floats per vertex: position followed by color.
pub const VERTEX_LEN: usize = 6;

#[rustfmt::skip]
const TRIANGLE: [f32; 18] = [
    -0.5, -0.5, 0.0, 1.0, 1.0, 1.0,
    0.5, -0.5, 0.0, 1.0, 1.0, 1.0,
    0.0, 0.5, 0.0, 1.0, 1.0, 1.0,
];

// corner `i` sits at +0.5 on x, y, z for bits 0, 1, 2 of `i`
#[rustfmt::skip]
const CUBE_FACES: [([usize; 6], [f32; 3]); 6] = [
    ([0, 1, 3, 3, 2, 0], [1.0, 0.0, 0.0]),
    ([4, 5, 7, 7, 6, 4], [0.0, 1.0, 0.0]),
    ([0, 2, 6, 6, 4, 0], [0.0, 0.0, 1.0]),
    ([1, 3, 7, 7, 5, 1], [1.0, 1.0, 0.0]),
    ([0, 1, 5, 5, 4, 0], [1.0, 0.0, 1.0]),
    ([2, 3, 7, 7, 6, 2], [0.0, 1.0, 1.0]),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Scene {
    /// Flat triangle tinted by the pulsing color.
    Triangle,
    /// Cube with one color per face, spinning in perspective.
    Cube,
}

impl Scene {
    pub fn vertices(&self) -> Vec<f32> {
        match self {
            Scene::Triangle => TRIANGLE.to_vec(),
            Scene::Cube => CUBE_FACES
                .iter()
                .flat_map(|(corners, color)| {
                    corners.iter().flat_map(move |c| {
                        let coord = |bit: usize| if c & bit != 0 { 0.5 } else { -0.5 };
                        [coord(1), coord(2), coord(4), color[0], color[1], color[2]]
                    })
                })
                .collect(),
        }
    }

    pub fn needs_depth(&self) -> bool {
        matches!(self, Scene::Cube)
    }

    pub fn always_pulses(&self) -> bool {
        matches!(self, Scene::Triangle)
    }

    pub fn model(&self, seconds: f32) -> Matrix4<f32> {
        match self {
            Scene::Triangle => Matrix4::identity(),
            Scene::Cube => Matrix4::from_axis_angle(
                Vector3::new(0.5, 1.0, 0.0).normalize(),
                Deg(50.0 * seconds),
            ),
        }
    }

    pub fn view(&self) -> Matrix4<f32> {
        match self {
            Scene::Triangle => Matrix4::identity(),
            Scene::Cube => Matrix4::from_translation(Vector3::new(0.0, 0.0, -3.0)),
        }
    }

    pub fn projection(&self, aspect_ratio: f32) -> Matrix4<f32> {
        match self {
            Scene::Triangle => Matrix4::identity(),
            Scene::Cube => cgmath::perspective(Deg(45.0), aspect_ratio, 0.1, 100.0),
        }
    }
}

/// Red and green channels oscillating out of phase, each within `[0, 1]`.
pub fn pulse_color(seconds: f32) -> Vector4<f32> {
    Vector4::new(
        seconds.cos() / 2.0 + 0.5,
        seconds.sin() / 2.0 + 0.5,
        0.0,
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_vertices() {
        let v = Scene::Triangle.vertices();

        assert_eq!(v.len(), 3 * VERTEX_LEN);
        assert_eq!(&v[..3], &[-0.5, -0.5, 0.0]);
    }

    #[test]
    fn cube_vertices() {
        let v = Scene::Cube.vertices();

        assert_eq!(v.len(), 36 * VERTEX_LEN);

        for vertex in v.chunks(VERTEX_LEN) {
            assert!(vertex[..3].iter().all(|c| c.abs() == 0.5), "{vertex:?}");
        }

        // every face is flat: one coordinate is shared by all six of its vertices
        for face in v.chunks(6 * VERTEX_LEN) {
            let flat = (0..3).any(|axis| {
                face.chunks(VERTEX_LEN)
                    .all(|vertex| vertex[axis] == face[axis])
            });
            assert!(flat);
        }
    }

    #[test]
    fn cube_starts_unrotated() {
        assert_eq!(Scene::Cube.model(0.0), Matrix4::identity());
        assert_ne!(Scene::Cube.model(1.0), Matrix4::identity());
        assert_eq!(Scene::Triangle.model(12.0), Matrix4::identity());
    }

    #[test]
    fn pulse_color_test() {
        assert_eq!(pulse_color(0.0), Vector4::new(1.0, 0.5, 0.0, 1.0));

        for i in 0..100 {
            let c = pulse_color(i as f32 * 0.37);
            assert!((0.0..=1.0).contains(&c.x));
            assert!((0.0..=1.0).contains(&c.y));
        }
    }
}
