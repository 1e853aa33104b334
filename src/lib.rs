//! Float math primitives for real-time 3D rendering.
//!
//! [`Vec4`] is a homogeneous vector whose `w` component tags it as a
//! position or a direction; [`Mat4`] is a column-major 4x4 transform.
//! Both mutate in place, chain, and expose their raw float buffers for
//! zero-copy upload to a graphics pipeline:
//!
//! ```
//! use wmath::{Mat4, Vec4, TO_RADIANS};
//!
//! let mut view = Mat4::identity();
//! view.rotate_axis(90.0 * TO_RADIANS, 0.0, 1.0, 0.0)
//!     .translate(0.0, 0.0, -5.0);
//!
//! let mut point = Vec4::new(1.0, 0.0, 0.0, true);
//! point.transform(&view);
//!
//! let raw: &[u8] = bytemuck::bytes_of(&view); // 64 bytes, column-major
//! assert_eq!(raw.len(), 64);
//! ```
//!
//! Instances are plain mutable values with no internal synchronization;
//! sharing one across threads is the caller's problem.

mod error;
mod mat4;
mod noise;
mod scalar;
mod vec4;

pub use error::MathError;
pub use mat4::Mat4;
pub use noise::{NoiseSource, NoiseStretch};
pub use scalar::{
    FastAbs, TO_DEGREES, TO_DEGREES_D, TO_RADIANS, TO_RADIANS_D, about_equal, within_range,
};
pub use vec4::Vec4;

pub const PI: f32 = std::f32::consts::PI;
pub const TAU: f32 = std::f32::consts::TAU;
