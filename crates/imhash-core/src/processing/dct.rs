//! Separable 2D DCT-II over square luminance matrices.

use ndarray::{Array2, Axis};
use rustdct::{DctPlanner, TransformType2And3};
use std::sync::Arc;

/// Relative magnitude below which a coefficient is treated as rounding noise
const NOISE_FLOOR: f64 = 1e-9;

/// A planned 2D DCT-II for `size × size` matrices.
///
/// The transform is unnormalised: the DC term is the sum of all samples.
#[derive(Clone)]
pub struct Dct2d {
    size: usize,
    dct: Arc<dyn TransformType2And3<f64>>,
}

impl Dct2d {
    pub fn new(size: usize) -> Self {
        let mut planner = DctPlanner::new();
        Self {
            size,
            dct: planner.plan_dct2(size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Transform rows, then columns. `input` must be `size × size`.
    pub fn transform(&self, input: &Array2<f64>) -> Array2<f64> {
        debug_assert_eq!(input.dim(), (self.size, self.size));

        let mut output = input.to_owned();
        let mut buffer = vec![0.0; self.size];

        for axis in [Axis(1), Axis(0)] {
            for mut lane in output.lanes_mut(axis) {
                for (dst, src) in buffer.iter_mut().zip(lane.iter()) {
                    *dst = *src;
                }
                self.dct.process_dct2(&mut buffer);
                for (dst, src) in lane.iter_mut().zip(buffer.iter()) {
                    *dst = *src;
                }
            }
        }

        output
    }
}

/// Zero out coefficients that are indistinguishable from floating point noise
/// relative to the largest coefficient.
pub fn flush_noise(coefficients: &mut Array2<f64>) {
    let max_abs = coefficients.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()));
    let tolerance = max_abs * NOISE_FLOOR;

    coefficients.mapv_inplace(|c| if c.abs() < tolerance { 0.0 } else { c });
}
