use cgmath::{Array, Matrix, Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};
use gl::types::GLint;

/// Value of a GLSL uniform. Matrices are stored and uploaded column-major.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Uniform {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
    Mat2(Matrix2<f32>),
    Mat3(Matrix3<f32>),
    Mat4(Matrix4<f32>),
}

impl Uniform {
    pub fn glsl_type(&self) -> &'static str {
        match self {
            Uniform::Bool(_) => "bool",
            Uniform::Int(_) => "int",
            Uniform::Float(_) => "float",
            Uniform::Vec2(_) => "vec2",
            Uniform::Vec3(_) => "vec3",
            Uniform::Vec4(_) => "vec4",
            Uniform::Mat2(_) => "mat2",
            Uniform::Mat3(_) => "mat3",
            Uniform::Mat4(_) => "mat4",
        }
    }

    /// # Safety
    /// Needs a current context, and `location` must belong to the active program.
    pub(crate) unsafe fn upload(&self, location: GLint) {
        match self {
            Uniform::Bool(v) => gl::Uniform1i(location, *v as GLint),
            Uniform::Int(v) => gl::Uniform1i(location, *v),
            Uniform::Float(v) => gl::Uniform1f(location, *v),
            Uniform::Vec2(v) => gl::Uniform2fv(location, 1, v.as_ptr()),
            Uniform::Vec3(v) => gl::Uniform3fv(location, 1, v.as_ptr()),
            Uniform::Vec4(v) => gl::Uniform4fv(location, 1, v.as_ptr()),
            Uniform::Mat2(m) => gl::UniformMatrix2fv(location, 1, gl::FALSE, m.as_ptr()),
            Uniform::Mat3(m) => gl::UniformMatrix3fv(location, 1, gl::FALSE, m.as_ptr()),
            Uniform::Mat4(m) => gl::UniformMatrix4fv(location, 1, gl::FALSE, m.as_ptr()),
        }
    }
}

macro_rules! impl_from {
    ($($src:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$src> for Uniform {
                fn from(v: $src) -> Self {
                    Uniform::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => Int,
    f32 => Float,
    Vector2<f32> => Vec2,
    Vector3<f32> => Vec3,
    Vector4<f32> => Vec4,
    Matrix2<f32> => Mat2,
    Matrix3<f32> => Mat3,
    Matrix4<f32> => Mat4,
}

impl From<(f32, f32)> for Uniform {
    fn from((x, y): (f32, f32)) -> Self {
        Uniform::Vec2(Vector2::new(x, y))
    }
}

impl From<(f32, f32, f32)> for Uniform {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Uniform::Vec3(Vector3::new(x, y, z))
    }
}

impl From<(f32, f32, f32, f32)> for Uniform {
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        Uniform::Vec4(Vector4::new(x, y, z, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    #[test]
    fn conversions() {
        assert_eq!(Uniform::from(true), Uniform::Bool(true));
        assert_eq!(Uniform::from(3_i32), Uniform::Int(3));
        assert_eq!(Uniform::from(1.5_f32), Uniform::Float(1.5));
        assert_eq!(
            Uniform::from((1.0_f32, 2.0_f32)),
            Uniform::Vec2(Vector2::new(1.0, 2.0))
        );
        assert_eq!(
            Uniform::from((1.0_f32, 2.0_f32, 3.0_f32, 4.0_f32)),
            Uniform::from(Vector4::<f32>::new(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(Uniform::from(Matrix3::<f32>::identity()).glsl_type(), "mat3");
    }

    #[test]
    fn matrices_are_column_major() {
        let m = Matrix4::<f32>::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let flat = unsafe { std::slice::from_raw_parts(m.as_ptr(), 16) };

        // translation lives in the last column
        assert_eq!(&flat[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(flat[3], 0.0);

        let m2 = Matrix2::<f32>::new(1.0, 2.0, 3.0, 4.0);
        let flat = unsafe { std::slice::from_raw_parts(m2.as_ptr(), 4) };

        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m2.x, Vector2::new(1.0, 2.0));
    }
}
