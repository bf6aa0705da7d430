//! Vector types shared by the samplers.

pub use cgmath::Vector3;

/// Points, directions and normals alike.
pub type Vec3 = Vector3<f32>;

pub mod prelude {
    pub use cgmath::prelude::*;
}

/// Checks that no component is NaN or infinite.
pub fn is_finite(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

pub fn to_array(v: Vec3) -> [f32; 3] {
    [v.x, v.y, v.z]
}
