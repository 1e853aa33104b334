//! Per-axis coordinate stretching for a pluggable noise generator.

/// A 2D/3D noise generator. Implemented by the caller; this crate only
/// reshapes the sampling coordinates.
pub trait NoiseSource {
    fn noise2(&self, x: f64, z: f64) -> f64;
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Stretches a noise source along the axes by dividing each sampling
/// coordinate by its stretch factor.
#[derive(Debug, Clone)]
pub struct NoiseStretch<N> {
    noise: N,
    stretch_x: f64,
    stretch_y: f64,
    stretch_z: f64,
}

impl<N: NoiseSource> NoiseStretch<N> {
    /// 2D stretch over the x and z axes; the y stretch stays at 1.
    pub fn flat(noise: N, stretch_x: f64, stretch_z: f64) -> Self {
        Self::volume(noise, stretch_x, 1.0, stretch_z)
    }

    /// 3D stretch over all axes.
    pub fn volume(noise: N, stretch_x: f64, stretch_y: f64, stretch_z: f64) -> Self {
        Self {
            noise,
            stretch_x,
            stretch_y,
            stretch_z,
        }
    }

    pub fn noise2(&self, x: f64, z: f64) -> f64 {
        self.noise.noise2(x / self.stretch_x, z / self.stretch_z)
    }

    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise
            .noise3(x / self.stretch_x, y / self.stretch_y, z / self.stretch_z)
    }
}
