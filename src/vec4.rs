use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::mat4::Mat4;

/// A homogeneous 3D vector backed by four floats `[x, y, z, w]`.
///
/// The `w` component tags the vector as a direction (`w = 0`, unaffected
/// by translation) or a position (`w = 1`, affected by translation). Most
/// mutators leave `w` untouched so the tag survives chained updates.
///
/// All operations mutate in place and return `&mut Self` for chaining;
/// none allocate. The backing buffer is laid out for zero-copy handoff to
/// a rendering API via [`bytemuck`].
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec4 {
    pub data: [f32; 4],
}

impl Vec4 {
    pub const LENGTH: usize = 4;
    pub const SIZE_BYTE: usize = Self::LENGTH * size_of::<f32>();

    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const Z: usize = 2;
    pub const W: usize = 3;

    /// A zero vector, tagged as a direction.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(x: f32, y: f32, z: f32, is_position: bool) -> Self {
        Self {
            data: [x, y, z, if is_position { 1.0 } else { 0.0 }],
        }
    }

    pub fn x(&self) -> f32 {
        self.data[Self::X]
    }

    pub fn y(&self) -> f32 {
        self.data[Self::Y]
    }

    pub fn z(&self) -> f32 {
        self.data[Self::Z]
    }

    pub fn w(&self) -> f32 {
        self.data[Self::W]
    }

    /// Sets x, y and z, leaving the w tag unchanged.
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.data[Self::X] = x;
        self.data[Self::Y] = y;
        self.data[Self::Z] = z;
        self
    }

    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.data[Self::X] = x;
        self
    }

    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.data[Self::Y] = y;
        self
    }

    pub fn set_z(&mut self, z: f32) -> &mut Self {
        self.data[Self::Z] = z;
        self
    }

    /// Copies all four components from `other`.
    pub fn set_from(&mut self, other: &Vec4) -> &mut Self {
        self.set_unchecked(&other.data)
    }

    /// Copies external data into this vector.
    ///
    /// Fails with [`MathError::InvalidLength`] unless `data` holds exactly
    /// four components.
    pub fn set_slice(&mut self, data: &[f32]) -> Result<&mut Self, MathError> {
        if data.len() != Self::LENGTH {
            return Err(MathError::InvalidLength {
                expected: Self::LENGTH,
                actual: data.len(),
            });
        }
        Ok(self.set_unchecked(data))
    }

    /// Fast path without length validation: undersized input panics on the
    /// slice index, trailing elements of oversized input are ignored.
    pub(crate) fn set_unchecked(&mut self, data: &[f32]) -> &mut Self {
        self.data.copy_from_slice(&data[..Self::LENGTH]);
        self
    }

    /// Zeroes x, y and z, leaving the w tag unchanged.
    pub fn set_zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0)
    }

    /// Zeroes x, y and z and turns this into a position.
    pub fn set_zero_position(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0).set_is_position()
    }

    /// Zeroes x, y and z and turns this into a direction.
    pub fn set_zero_direction(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0).set_is_direction()
    }

    /// True iff `w` is exactly 0. Any other value is neither a direction
    /// nor a position.
    pub fn is_direction(&self) -> bool {
        self.data[Self::W] == 0.0
    }

    /// True iff `w` is exactly 1.
    pub fn is_position(&self) -> bool {
        self.data[Self::W] == 1.0
    }

    pub fn set_is_direction(&mut self) -> &mut Self {
        self.data[Self::W] = 0.0;
        self
    }

    pub fn set_is_position(&mut self) -> &mut Self {
        self.data[Self::W] = 1.0;
        self
    }

    /// Squared length over x, y and z. The w tag never contributes.
    pub fn length_squared(&self) -> f32 {
        let x = self.data[Self::X];
        let y = self.data[Self::Y];
        let z = self.data[Self::Z];
        x * x + y * y + z * z
    }

    /// Length over x, y and z, accumulated in f64.
    pub fn length(&self) -> f32 {
        let x = f64::from(self.data[Self::X]);
        let y = f64::from(self.data[Self::Y]);
        let z = f64::from(self.data[Self::Z]);
        (x * x + y * y + z * z).sqrt() as f32
    }

    /// Scales x, y and z to unit length.
    ///
    /// Fails with [`MathError::ZeroLength`] when the length is exactly
    /// zero, for positions and directions alike.
    pub fn normalize(&mut self) -> Result<&mut Self, MathError> {
        let length = self.length();
        if length == 0.0 {
            return Err(MathError::ZeroLength);
        }
        self.data[Self::X] /= length;
        self.data[Self::Y] /= length;
        self.data[Self::Z] /= length;
        Ok(self)
    }

    pub fn add(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.data[Self::X] += x;
        self.data[Self::Y] += y;
        self.data[Self::Z] += z;
        self
    }

    pub fn add_vec(&mut self, other: &Vec4) -> &mut Self {
        self.add(other.data[Self::X], other.data[Self::Y], other.data[Self::Z])
    }

    pub fn add_x(&mut self, x: f32) -> &mut Self {
        self.data[Self::X] += x;
        self
    }

    pub fn add_y(&mut self, y: f32) -> &mut Self {
        self.data[Self::Y] += y;
        self
    }

    pub fn add_z(&mut self, z: f32) -> &mut Self {
        self.data[Self::Z] += z;
        self
    }

    pub fn sub(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.data[Self::X] -= x;
        self.data[Self::Y] -= y;
        self.data[Self::Z] -= z;
        self
    }

    pub fn sub_vec(&mut self, other: &Vec4) -> &mut Self {
        self.sub(other.data[Self::X], other.data[Self::Y], other.data[Self::Z])
    }

    pub fn sub_x(&mut self, x: f32) -> &mut Self {
        self.data[Self::X] -= x;
        self
    }

    pub fn sub_y(&mut self, y: f32) -> &mut Self {
        self.data[Self::Y] -= y;
        self
    }

    pub fn sub_z(&mut self, z: f32) -> &mut Self {
        self.data[Self::Z] -= z;
        self
    }

    /// Componentwise scale.
    pub fn shear(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.data[Self::X] *= x;
        self.data[Self::Y] *= y;
        self.data[Self::Z] *= z;
        self
    }

    pub fn shear_x(&mut self, x: f32) -> &mut Self {
        self.data[Self::X] *= x;
        self
    }

    pub fn shear_y(&mut self, y: f32) -> &mut Self {
        self.data[Self::Y] *= y;
        self
    }

    pub fn shear_z(&mut self, z: f32) -> &mut Self {
        self.data[Self::Z] *= z;
        self
    }

    /// Uniform scale of x, y and z.
    pub fn scale(&mut self, magnitude: f32) -> &mut Self {
        self.shear(magnitude, magnitude, magnitude)
    }

    /// Dot product over x, y and z. The w tag is ignored.
    pub fn dot(&self, other: &Vec4) -> f32 {
        self.data[Self::X] * other.data[Self::X]
            + self.data[Self::Y] * other.data[Self::Y]
            + self.data[Self::Z] * other.data[Self::Z]
    }

    /// Cross product of `self` and `other`, written into `self`.
    pub fn cross(&mut self, other: &Vec4) -> &mut Self {
        // all three products before any write, the operation is in place
        let x = self.data[Self::Y] * other.data[Self::Z] - self.data[Self::Z] * other.data[Self::Y];
        let y = self.data[Self::Z] * other.data[Self::X] - self.data[Self::X] * other.data[Self::Z];
        let z = self.data[Self::X] * other.data[Self::Y] - self.data[Self::Y] * other.data[Self::X];
        self.data[Self::X] = x;
        self.data[Self::Y] = y;
        self.data[Self::Z] = z;
        self
    }

    /// Applies the full matrix-vector product.
    ///
    /// Each of x, y and z picks up the matrix row dotted with all four
    /// components, so the translation column moves positions (`w = 1`) but
    /// not directions (`w = 0`). The w tag itself is not rewritten.
    pub fn transform(&mut self, matrix: &Mat4) -> &mut Self {
        let [x, y, z, w] = self.data;
        self.data[Self::X] = matrix.data[Mat4::XX] * x
            + matrix.data[Mat4::XY] * y
            + matrix.data[Mat4::XZ] * z
            + matrix.data[Mat4::XW] * w;
        self.data[Self::Y] = matrix.data[Mat4::YX] * x
            + matrix.data[Mat4::YY] * y
            + matrix.data[Mat4::YZ] * z
            + matrix.data[Mat4::YW] * w;
        self.data[Self::Z] = matrix.data[Mat4::ZX] * x
            + matrix.data[Mat4::ZY] * y
            + matrix.data[Mat4::ZZ] * z
            + matrix.data[Mat4::ZW] * w;
        self
    }

    /// Adds the matrix translation column. No-op for directions.
    pub fn translate(&mut self, matrix: &Mat4) -> &mut Self {
        if self.data[Self::W] != 0.0 {
            self.data[Self::X] += matrix.data[Mat4::XW];
            self.data[Self::Y] += matrix.data[Mat4::YW];
            self.data[Self::Z] += matrix.data[Mat4::ZW];
        }
        self
    }

    /// The raw `[x, y, z, w]` backing buffer.
    pub fn as_slice(&self) -> &[f32; 4] {
        &self.data
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(data: [f32; 4]) -> Self {
        Self { data }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(vec: Vec4) -> Self {
        vec.data
    }
}

// Bitwise comparison: NaN-safe, and -0.0 != 0.0.
impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Vec4 {}

impl Hash for Vec4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in &self.data {
            state.write_u32(value.to_bits());
        }
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.data[Self::X],
            self.data[Self::Y],
            self.data[Self::Z],
            self.data[Self::W]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn zero_is_a_direction() {
        let v = Vec4::zero();
        assert_eq!(v.data, [0.0; 4]);
        assert!(v.is_direction());
        assert!(!v.is_position());
    }

    #[test]
    fn new_sets_the_w_tag() {
        let p = Vec4::new(1.0, 2.0, 3.0, true);
        assert_eq!(p.data, [1.0, 2.0, 3.0, 1.0]);
        assert!(p.is_position());
        let d = Vec4::new(1.0, 2.0, 3.0, false);
        assert_eq!(d.data, [1.0, 2.0, 3.0, 0.0]);
        assert!(d.is_direction());
    }

    #[test]
    fn set_leaves_w_untouched() {
        let mut v = Vec4::new(0.0, 0.0, 0.0, true);
        v.set(1.0, 22.5544, 1132.22);
        assert_eq!(v.data, [1.0, 22.5544, 1132.22, 1.0]);
        v.set_x(-4.0).set_y(5.0).set_z(6.5);
        assert_eq!(v.data, [-4.0, 5.0, 6.5, 1.0]);
    }

    #[test]
    fn set_slice_validates_length() {
        let mut v = Vec4::zero();
        assert_eq!(
            v.set_slice(&[1.0]),
            Err(MathError::InvalidLength {
                expected: 4,
                actual: 1
            })
        );
        assert_eq!(
            v.set_slice(&[0.0; 5]),
            Err(MathError::InvalidLength {
                expected: 4,
                actual: 5
            })
        );
        v.set_slice(&[1.0, 2.0, 3.0, 1.0]).unwrap();
        assert_eq!(v.data, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn set_unchecked_ignores_trailing_elements() {
        let mut v = Vec4::zero();
        v.set_unchecked(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(v.data, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    #[should_panic]
    fn set_unchecked_panics_on_undersized_input() {
        Vec4::zero().set_unchecked(&[1.0, 2.0]);
    }

    #[test]
    fn tag_predicates_are_exact() {
        let mut v = Vec4::zero();
        for (w, dir, pos) in [
            (0.0, true, false),
            (1.0, false, true),
            (-1.0, false, false),
            (0.3, false, false),
        ] {
            v.data[Vec4::W] = w;
            assert_eq!(v.is_direction(), dir);
            assert_eq!(v.is_position(), pos);
        }
    }

    #[test]
    fn zero_and_tag_mutators() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, true);
        v.set_zero();
        assert_eq!(v.data, [0.0, 0.0, 0.0, 1.0]);
        v.set(1.0, 2.0, 3.0).set_zero_direction();
        assert_eq!(v.data, [0.0, 0.0, 0.0, 0.0]);
        v.set(1.0, 2.0, 3.0).set_zero_position();
        assert_eq!(v.data, [0.0, 0.0, 0.0, 1.0]);
        v.set(1.0, 2.0, 3.0).set_is_direction();
        assert_eq!(v.data, [1.0, 2.0, 3.0, 0.0]);
        v.set_is_position();
        assert_eq!(v.data, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn length_ignores_w() {
        let mut v = Vec4::new(1.0, 0.0, 0.0, true);
        assert_eq!(v.length_squared(), 1.0);
        assert_eq!(v.length(), 1.0);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let (x, y, z): (f32, f32, f32) = (
                rng.random::<f32>() * 100.0,
                rng.random::<f32>() * 100.0,
                rng.random::<f32>() * 100.0,
            );
            v.set(x, y, z);
            assert_eq!(v.length_squared(), x * x + y * y + z * z);
            let expected = (f64::from(x) * f64::from(x)
                + f64::from(y) * f64::from(y)
                + f64::from(z) * f64::from(z))
            .sqrt() as f32;
            assert!((v.length() - expected).abs() <= 1e-6 * expected);
        }
    }

    #[test]
    fn normalize_zero_fails_for_both_tags() {
        let mut v = Vec4::zero();
        assert_eq!(v.normalize().unwrap_err(), MathError::ZeroLength);
        v.set_is_position();
        assert_eq!(v.normalize().unwrap_err(), MathError::ZeroLength);
    }

    #[test]
    fn normalize_yields_unit_length() {
        let mut v = Vec4::new(2.0, 0.0, 0.0, false);
        v.normalize().unwrap();
        assert_eq!(v.data, [1.0, 0.0, 0.0, 0.0]);

        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..200 {
            let mut x = rng.random::<f32>() * 100.0;
            let y = rng.random::<f32>() * 100.0;
            let z = rng.random::<f32>() * 100.0;
            if x == 0.0 && y == 0.0 && z == 0.0 {
                x = 1.0;
            }
            v.set(x, y, z);
            if i % 2 == 0 {
                v.set_is_position();
            } else {
                v.set_is_direction();
            }
            let w = v.w();
            v.normalize().unwrap();
            assert!((v.length_squared() - 1.0).abs() <= 1e-6);
            assert_eq!(v.w(), w);
        }
    }

    #[test]
    fn arithmetic_preserves_w() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, true);
        v.add(1.0, 1.0, 1.0).sub(0.5, 0.5, 0.5);
        assert_eq!(v.data, [1.5, 2.5, 3.5, 1.0]);
        v.add_x(0.5).add_y(0.5).add_z(0.5);
        assert_eq!(v.data, [2.0, 3.0, 4.0, 1.0]);
        v.sub_x(1.0).sub_y(1.0).sub_z(1.0);
        assert_eq!(v.data, [1.0, 2.0, 3.0, 1.0]);

        let other = Vec4::new(1.0, 1.0, 1.0, false);
        v.add_vec(&other);
        assert_eq!(v.data, [2.0, 3.0, 4.0, 1.0]);
        v.sub_vec(&other);
        assert_eq!(v.data, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn shear_and_scale() {
        let mut v = Vec4::new(3.0, 2.0, 1.0, true);
        v.shear(0.22, -93836.3, 15.0);
        assert_eq!(v.data[Vec4::X], 3.0 * 0.22);
        assert_eq!(v.data[Vec4::Y], 2.0 * -93836.3);
        assert_eq!(v.data[Vec4::Z], 1.0 * 15.0);
        assert!(v.is_position());

        v.set(1.0, 2.0, 3.0).scale(2.0);
        assert_eq!(v.data, [2.0, 4.0, 6.0, 1.0]);
        v.shear_x(0.5).shear_y(0.25).shear_z(0.5);
        assert_eq!(v.data, [1.0, 1.0, 3.0, 1.0]);
    }

    #[test]
    fn dot_of_axes() {
        let x = Vec4::new(1.0, 0.0, 0.0, false);
        let y = Vec4::new(0.0, 1.0, 0.0, false);
        let z = Vec4::new(0.0, 0.0, 1.0, false);
        assert_eq!(x.dot(&y), 0.0);
        assert_eq!(x.dot(&z), 0.0);
        assert_eq!(y.dot(&z), 0.0);
        assert_eq!(x.dot(&x), 1.0);
        assert_eq!(y.dot(&y), 1.0);
        assert_eq!(z.dot(&z), 1.0);
    }

    #[test]
    fn dot_ignores_w() {
        let a = Vec4::new(1.0, 2.0, 3.0, true);
        let b = Vec4::new(4.0, 5.0, 6.0, true);
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    fn cross_product() {
        let mut a = Vec4::new(1.0, 2.0, 3.0, false);
        let b = Vec4::new(3.0, 2.0, 1.0, false);
        a.cross(&b);
        assert_eq!(a.data, [-4.0, 8.0, -4.0, 0.0]);

        // x cross y = z
        let mut x = Vec4::new(1.0, 0.0, 0.0, false);
        let y = Vec4::new(0.0, 1.0, 0.0, false);
        x.cross(&y);
        assert_eq!(x.data, [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn transform_respects_the_w_tag() {
        let mut m = Mat4::zero();
        m.set_identity().set_translate(10.0, 20.0, 30.0);

        let mut direction = Vec4::new(1.0, 2.0, 3.0, false);
        direction.transform(&m);
        assert_eq!(direction.data, [1.0, 2.0, 3.0, 0.0]);

        let mut position = Vec4::new(1.0, 2.0, 3.0, true);
        position.transform(&m);
        assert_eq!(position.data, [11.0, 22.0, 33.0, 1.0]);
    }

    #[test]
    fn translate_is_a_noop_for_directions() {
        let mut m = Mat4::zero();
        m.set_identity().set_translate(10.0, 20.0, 30.0);

        let mut direction = Vec4::new(1.0, 2.0, 3.0, false);
        direction.translate(&m);
        assert_eq!(direction.data, [1.0, 2.0, 3.0, 0.0]);

        let mut position = Vec4::new(1.0, 2.0, 3.0, true);
        position.translate(&m);
        assert_eq!(position.data, [11.0, 22.0, 33.0, 1.0]);
    }

    #[test]
    fn equality_is_bitwise() {
        let nan = Vec4::new(f32::NAN, 0.0, 0.0, false);
        let same = nan;
        assert_eq!(nan, same);

        let pos_zero = Vec4::new(0.0, 0.0, 0.0, false);
        let neg_zero = Vec4::new(-0.0, 0.0, 0.0, false);
        assert_ne!(pos_zero, neg_zero);

        let a = Vec4::new(1.0, 2.0, 3.0, true);
        let mut b = Vec4::zero();
        b.set_from(&a);
        assert_eq!(a, b);
    }

    #[test]
    fn buffer_layout() {
        let v = Vec4::new(1.0, 2.0, 3.0, true);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(Vec4::SIZE_BYTE, 16);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), Vec4::SIZE_BYTE);
        assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes()[..]);
    }

    #[test]
    fn display_format() {
        let v = Vec4::new(1.0, 2.5, -3.0, true);
        assert_eq!(v.to_string(), "(1, 2.5, -3, 1)");
    }
}
