//! Vector math used for pointer coordinates.
//!
//! Re-exports the SIMD-friendly [`glam`] types. Pointer positions travel through
//! the drag system as [`Vec2`]; the layout tree itself works on scalar axes.
//!
//! ```
//! use trellis_core::math::Vec2;
//!
//! let start = Vec2::new(120.0, 40.0);
//! let now = Vec2::new(120.0, 65.0);
//! assert_eq!((now - start).y, 25.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};

use crate::geometry::Pos;

impl From<Vec2> for Pos<f32> {
    fn from(v: Vec2) -> Self {
        Pos::new(v.x, v.y)
    }
}

impl From<Pos<f32>> for Vec2 {
    fn from(p: Pos<f32>) -> Self {
        Vec2::new(p.x, p.y)
    }
}
