//! Area (box) resampling of luminance matrices.
//!
//! Each output cell is the mean of the source samples under its footprint,
//! weighted by how much of each sample the footprint covers. The same weights
//! work for shrinking and for enlarging images smaller than the target.

use ndarray::{Array1, Array2};

/// Resample `src` to a `size × size` matrix
pub fn area_resample(src: &Array2<f64>, size: usize) -> Array2<f64> {
    let (rows, cols) = src.dim();
    area_resample_rows(cols, rows, size, |y, row| row.assign(&src.row(y)))
}

/// Resample a `width × height` source that is produced one row at a time.
///
/// `fill_row(y, row)` writes source row `y` into `row`. Only that row and the
/// `size × size` output are held in memory.
pub fn area_resample_rows<F>(
    width: usize,
    height: usize,
    size: usize,
    mut fill_row: F,
) -> Array2<f64>
where
    F: FnMut(usize, &mut Array1<f64>),
{
    let row_weights = coverage_weights(height, size);
    let col_weights = coverage_weights(width, size);

    let mut row = Array1::zeros(width);
    let mut output = Array2::zeros((size, size));

    for y in 0..height {
        fill_row(y, &mut row);
        let reduced = col_weights.dot(&row);

        for (i, &weight) in row_weights.column(y).iter().enumerate() {
            if weight > 0.0 {
                output.row_mut(i).scaled_add(weight, &reduced);
            }
        }
    }

    output
}

/// `dst × src` matrix whose row `i` holds the normalised coverage of every
/// source sample by output cell `i`
fn coverage_weights(src: usize, dst: usize) -> Array2<f64> {
    let mut weights = Array2::zeros((dst, src));
    let scale = src as f64 / dst as f64;

    for i in 0..dst {
        let start = i as f64 * scale;
        let end = (i + 1) as f64 * scale;

        let first = start.floor() as usize;
        let last = (end.ceil() as usize).min(src);

        for j in first..last {
            let overlap = end.min((j + 1) as f64) - start.max(j as f64);
            if overlap > 0.0 {
                weights[[i, j]] = overlap / scale;
            }
        }
    }

    weights
}
