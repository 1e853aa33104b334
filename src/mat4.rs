use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::scalar;
use crate::vec4::Vec4;

const IDENTITY_DATA: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

const IDENTITY: Mat4 = Mat4 {
    data: IDENTITY_DATA,
};

/// A 4x4 transform matrix backed by sixteen floats in column-major order.
///
/// Column-major is what OpenGL-style rendering APIs expect, so the backing
/// buffer can be handed over as-is via [`bytemuck`]. It only matters when
/// touching `data` directly; use the cell constants ([`Mat4::XX`] through
/// [`Mat4::WW`], first letter row, second letter column) for that.
///
/// All operations mutate in place and return `&mut Self` for chaining;
/// none allocate.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub const ROWS: usize = 4;
    pub const COLS: usize = 4;
    pub const LENGTH: usize = Self::ROWS * Self::COLS;
    pub const SIZE_BYTE: usize = Self::LENGTH * size_of::<f32>();

    /// Cell constants:
    /// ```text
    /// | xx xy xz xw |
    /// | yx yy yz yw |
    /// | zx zy zz zw |
    /// | wx wy wz ww |
    /// ```
    pub const XX: usize = 0;
    pub const YX: usize = 1;
    pub const ZX: usize = 2;
    pub const WX: usize = 3;
    pub const XY: usize = 4;
    pub const YY: usize = 5;
    pub const ZY: usize = 6;
    pub const WY: usize = 7;
    pub const XZ: usize = 8;
    pub const YZ: usize = 9;
    pub const ZZ: usize = 10;
    pub const WZ: usize = 11;
    pub const XW: usize = 12;
    pub const YW: usize = 13;
    pub const ZW: usize = 14;
    pub const WW: usize = 15;

    /// A fresh identity matrix. The shared constant behind this is never
    /// handed out directly.
    pub fn identity() -> Self {
        IDENTITY
    }

    /// A matrix with all cells set to 0.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Copies all sixteen cells from `other`.
    pub fn set_from(&mut self, other: &Mat4) -> &mut Self {
        self.set_unchecked(&other.data)
    }

    /// Copies external column-major data (`xx yx zx wx ...`) into this
    /// matrix.
    ///
    /// Fails with [`MathError::InvalidLength`] unless `data` holds exactly
    /// sixteen components.
    pub fn set_column_major(&mut self, data: &[f32]) -> Result<&mut Self, MathError> {
        if data.len() != Self::LENGTH {
            return Err(MathError::InvalidLength {
                expected: Self::LENGTH,
                actual: data.len(),
            });
        }
        Ok(self.set_unchecked(data))
    }

    /// Copies external row-major data (`xx xy xz xw ...`) into this
    /// matrix, transposing it into the column-major backing store.
    pub fn set_row_major(&mut self, data: &[f32]) -> Result<&mut Self, MathError> {
        if data.len() != Self::LENGTH {
            return Err(MathError::InvalidLength {
                expected: Self::LENGTH,
                actual: data.len(),
            });
        }
        self.data[Self::XX] = data[0];
        self.data[Self::XY] = data[1];
        self.data[Self::XZ] = data[2];
        self.data[Self::XW] = data[3];

        self.data[Self::YX] = data[4];
        self.data[Self::YY] = data[5];
        self.data[Self::YZ] = data[6];
        self.data[Self::YW] = data[7];

        self.data[Self::ZX] = data[8];
        self.data[Self::ZY] = data[9];
        self.data[Self::ZZ] = data[10];
        self.data[Self::ZW] = data[11];

        self.data[Self::WX] = data[12];
        self.data[Self::WY] = data[13];
        self.data[Self::WZ] = data[14];
        self.data[Self::WW] = data[15];

        Ok(self)
    }

    pub fn set_zero(&mut self) -> &mut Self {
        self.data = [0.0; Self::LENGTH];
        self
    }

    /// Fast path without length validation: undersized input panics on the
    /// slice index, trailing elements of oversized input are ignored.
    pub(crate) fn set_unchecked(&mut self, data: &[f32]) -> &mut Self {
        self.data.copy_from_slice(&data[..Self::LENGTH]);
        self
    }

    pub fn set_identity(&mut self) -> &mut Self {
        self.data = IDENTITY_DATA;
        self
    }

    /// Transposes this matrix in place by swapping the six off-diagonal
    /// pairs.
    pub fn set_transpose(&mut self) -> &mut Self {
        self.data.swap(Self::YX, Self::XY);
        self.data.swap(Self::ZX, Self::XZ);
        self.data.swap(Self::WX, Self::XW);
        self.data.swap(Self::ZY, Self::YZ);
        self.data.swap(Self::WY, Self::YW);
        self.data.swap(Self::WZ, Self::ZW);
        self
    }

    /// Sets this matrix to a simple orthogonal (2D) projection: identity
    /// with the Z axis flipped.
    pub fn set_orthogonal_projection(&mut self) -> &mut Self {
        self.set_identity();
        self.data[Self::ZZ] = -1.0;
        self
    }

    /// Sets this matrix to a perspective frustum projection.
    ///
    /// `fov_y` is the vertical field of view in degrees. Degenerate input
    /// (`z_far == z_near`, a zero aspect ratio, or a field of view whose
    /// half-angle sine is zero) leaves the matrix at identity.
    pub fn set_projection(
        &mut self,
        fov_y: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> &mut Self {
        self.set_identity();
        let radians = fov_y / 2.0 * scalar::TO_RADIANS;
        let delta_z = z_far - z_near;
        let sine = radians.sin();

        if delta_z == 0.0 || sine == 0.0 || aspect_ratio == 0.0 {
            log::debug!(
                "degenerate projection (fov_y={}, aspect_ratio={}, z_near={}, z_far={}), keeping identity",
                fov_y,
                aspect_ratio,
                z_near,
                z_far
            );
            return self;
        }

        let cotangent = radians.cos() / sine;

        self.data[Self::XX] = cotangent / aspect_ratio;
        self.data[Self::YY] = cotangent;
        self.data[Self::ZZ] = -(z_far + z_near) / delta_z;
        self.data[Self::WZ] = -1.0;
        self.data[Self::ZW] = -2.0 * z_near * z_far / delta_z;
        self.data[Self::WW] = 0.0;
        self
    }

    /// Sets this matrix to a look (view) matrix from a camera position and
    /// its right/up/look basis vectors.
    ///
    /// The basis vectors are assumed to be mutually orthonormal; nothing
    /// here normalizes or orthogonalizes them.
    pub fn set_look(&mut self, position: &Vec4, right: &Vec4, up: &Vec4, look: &Vec4) -> &mut Self {
        self.data[Self::XX] = right.x();
        self.data[Self::XY] = right.y();
        self.data[Self::XZ] = right.z();
        self.data[Self::XW] = -position.x();

        self.data[Self::YX] = up.x();
        self.data[Self::YY] = up.y();
        self.data[Self::YZ] = up.z();
        self.data[Self::YW] = -position.y();

        self.data[Self::ZX] = look.x();
        self.data[Self::ZY] = look.y();
        self.data[Self::ZZ] = look.z();
        self.data[Self::ZW] = -position.z();

        self.data[Self::WX] = 0.0;
        self.data[Self::WY] = 0.0;
        self.data[Self::WZ] = 0.0;
        self.data[Self::WW] = 1.0;

        self
    }

    /// Componentwise addition over all sixteen cells.
    pub fn add(&mut self, other: &Mat4) -> &mut Self {
        for (cell, value) in self.data.iter_mut().zip(other.data.iter()) {
            *cell += value;
        }
        self
    }

    /// Componentwise subtraction over all sixteen cells.
    pub fn sub(&mut self, other: &Mat4) -> &mut Self {
        for (cell, value) in self.data.iter_mut().zip(other.data.iter()) {
            *cell -= value;
        }
        self
    }

    /// Matrix multiplication `self x other`, honoring column-major
    /// storage.
    ///
    /// The product goes through a scratch buffer before replacing the
    /// receiver, so squaring through a copy stays well defined. Matrix
    /// multiplication is not commutative: the rightmost operand applies
    /// first when the result transforms a vector.
    pub fn multiply(&mut self, other: &Mat4) -> &mut Self {
        let mut result = [0.0f32; Self::LENGTH];
        for row in 0..Self::ROWS {
            for col in 0..Self::COLS {
                result[col * Self::ROWS + row] = self.data[Self::XX + row]
                    * other.data[col * Self::ROWS]
                    + self.data[Self::XY + row] * other.data[col * Self::ROWS + 1]
                    + self.data[Self::XZ + row] * other.data[col * Self::ROWS + 2]
                    + self.data[Self::XW + row] * other.data[col * Self::ROWS + 3];
            }
        }
        self.data = result;
        self
    }

    /// Overwrites the three translation cells, keeping everything else.
    ///
    /// For a pure translation matrix, call [`Mat4::set_identity`] first.
    pub fn set_translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.data[Self::XW] = x;
        self.data[Self::YW] = y;
        self.data[Self::ZW] = z;
        self
    }

    /// Adds to the translation cells.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.data[Self::XW] += x;
        self.data[Self::YW] += y;
        self.data[Self::ZW] += z;
        self
    }

    /// Adds the x/y/z of `direction` to the translation cells.
    pub fn translate_vec(&mut self, direction: &Vec4) -> &mut Self {
        self.translate(direction.x(), direction.y(), direction.z())
    }

    /// Adds the translation cells of `other` to this matrix.
    pub fn translate_mat(&mut self, other: &Mat4) -> &mut Self {
        self.data[Self::XW] += other.data[Self::XW];
        self.data[Self::YW] += other.data[Self::YW];
        self.data[Self::ZW] += other.data[Self::ZW];
        self
    }

    pub fn translate_x(&mut self, x: f32) -> &mut Self {
        self.data[Self::XW] += x;
        self
    }

    pub fn translate_y(&mut self, y: f32) -> &mut Self {
        self.data[Self::YW] += y;
        self
    }

    pub fn translate_z(&mut self, z: f32) -> &mut Self {
        self.data[Self::ZW] += z;
        self
    }

    /// Rotates this matrix around the given axis.
    pub fn rotate(&mut self, radians: f32, axis: &Vec4) -> &mut Self {
        self.rotate_axis(radians, axis.x(), axis.y(), axis.z())
    }

    /// Rotates this matrix around the axis given by its components.
    pub fn rotate_axis(&mut self, radians: f32, axis_x: f32, axis_y: f32, axis_z: f32) -> &mut Self {
        let mut other = Mat4::zero();
        other.set_rotation_axis(radians, axis_x, axis_y, axis_z);
        self.multiply(&other)
    }

    /// Sets this matrix to a fixed rotation around the given axis.
    pub fn set_rotation(&mut self, radians: f32, axis: &Vec4) -> &mut Self {
        self.set_rotation_axis(radians, axis.x(), axis.y(), axis.z())
    }

    /// Sets this matrix to a fixed rotation around the axis given by its
    /// components, via the quaternion closed form.
    ///
    /// The axis is assumed to be normalized. A non-unit axis silently
    /// produces a scaled or skewed rotation.
    pub fn set_rotation_axis(
        &mut self,
        radians: f32,
        axis_x: f32,
        axis_y: f32,
        axis_z: f32,
    ) -> &mut Self {
        let radians_half = f64::from(radians) / 2.0;
        let q0 = radians_half.cos() as f32;
        let sin_half = radians_half.sin() as f32;
        let q1 = sin_half * axis_x;
        let q2 = sin_half * axis_y;
        let q3 = sin_half * axis_z;
        let q0_squared = q0 * q0;
        let q1_squared = q1 * q1;
        let q2_squared = q2 * q2;
        let q3_squared = q3 * q3;

        self.data[Self::XX] = q0_squared + q1_squared - q2_squared - q3_squared;
        self.data[Self::XY] = 2.0 * (q1 * q2 - q0 * q3);
        self.data[Self::XZ] = 2.0 * (q1 * q3 + q0 * q2);
        self.data[Self::XW] = 0.0;

        self.data[Self::YX] = 2.0 * (q2 * q1 + q0 * q3);
        self.data[Self::YY] = q0_squared - q1_squared + q2_squared - q3_squared;
        self.data[Self::YZ] = 2.0 * (q2 * q3 - q0 * q1);
        self.data[Self::YW] = 0.0;

        self.data[Self::ZX] = 2.0 * (q3 * q1 - q0 * q2);
        self.data[Self::ZY] = 2.0 * (q3 * q2 + q0 * q1);
        self.data[Self::ZZ] = q0_squared - q1_squared - q2_squared + q3_squared;
        self.data[Self::ZW] = 0.0;

        self.data[Self::WX] = 0.0;
        self.data[Self::WY] = 0.0;
        self.data[Self::WZ] = 0.0;
        self.data[Self::WW] = 1.0;

        self
    }

    /// True iff every cell pair is within `delta`.
    pub fn about_equal(&self, other: &Mat4, delta: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| scalar::about_equal(*a, *b, delta))
    }

    /// The raw column-major backing buffer.
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Self { data }
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(mat: Mat4) -> Self {
        mat.data
    }
}

// Bitwise comparison: NaN-safe, and -0.0 != 0.0.
impl PartialEq for Mat4 {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Mat4 {}

impl Hash for Mat4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in &self.data {
            state.write_u32(value.to_bits());
        }
    }
}

impl fmt::Display for Mat4 {
    /// Fixed four-row diagnostic grid, one `%7.3f`-style cell per value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data;
        writeln!(f)?;
        writeln!(
            f,
            "|{:7.3} {:7.3} {:7.3} {:7.3}|",
            d[Self::XX],
            d[Self::XY],
            d[Self::XZ],
            d[Self::XW]
        )?;
        writeln!(
            f,
            "|{:7.3} {:7.3} {:7.3} {:7.3}|",
            d[Self::YX],
            d[Self::YY],
            d[Self::YZ],
            d[Self::YW]
        )?;
        writeln!(
            f,
            "|{:7.3} {:7.3} {:7.3} {:7.3}|",
            d[Self::ZX],
            d[Self::ZY],
            d[Self::ZZ],
            d[Self::ZW]
        )?;
        writeln!(
            f,
            "|{:7.3} {:7.3} {:7.3} {:7.3}|",
            d[Self::WX],
            d[Self::WY],
            d[Self::WZ],
            d[Self::WW]
        )
    }
}
