//! Image-to-heightfield pipeline.
//!
//! Fixed step order, no branching on content beyond shape and range:
//! 1. reduce RGB to intensity (perceptual luma weights),
//! 2. divide by 255 if any input value exceeds 1,
//! 3. invert so dark stains become high ground,
//! 4. block-mean downsample to roughly [`TARGET_SAMPLES`] per axis,
//! 5. Gaussian blur (σ = [`SMOOTHING_SIGMA`]) to erase block artifacts.

use log::debug;

use crate::heightfield::HeightField;
use crate::pixels::PixelArray;

/// Perceptual luma weights for R, G, B.
pub const LUMA_WEIGHTS: [f32; 3] = [0.2989, 0.5870, 0.1140];

/// Target maximum samples per heightfield axis. The per-axis factor is
/// `max(dim / 400, 1)` with integer division, so dimensions in 401..799
/// survive undownsampled; the cap is approximate by design.
pub const TARGET_SAMPLES: usize = 400;

/// Standard deviation of the post-downsample blur, in samples.
pub const SMOOTHING_SIGMA: f32 = 3.0;

/// Reduce a pixel array to one intensity value per pixel.
///
/// Uniform RGB pixels reproduce their shared channel value (the weights sum
/// to 1). Single-channel input is copied through unchanged.
pub fn luma(pixels: &PixelArray) -> Vec<f32> {
    if !pixels.is_rgb() {
        return pixels.data().to_vec();
    }
    pixels
        .data()
        .chunks_exact(3)
        .map(|px| px[0] * LUMA_WEIGHTS[0] + px[1] * LUMA_WEIGHTS[1] + px[2] * LUMA_WEIGHTS[2])
        .collect()
}

/// Divide by 255 if any value exceeds 1; returns whether the division ran.
///
/// A single global max test, no per-pixel detection. A uint8-encoded image
/// whose values all happen to be ≤ 1 (near black) is left undivided; that
/// mis-handling is kept on purpose, the correct intent is ambiguous.
pub fn normalize_range(values: &mut [f32]) -> bool {
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if max > 1.0 {
        for v in values.iter_mut() {
            *v /= 255.0;
        }
        true
    } else {
        false
    }
}

/// Flip values around the [0, 1] midpoint: `v -> 1 - v`.
pub fn invert(values: &mut [f32]) {
    for v in values.iter_mut() {
        *v = 1.0 - *v;
    }
}

/// Non-overlapping block-mean downsampling with independent per-axis
/// factors. Partial edge blocks average only in-bounds samples; output
/// dimensions are `ceil(dim / factor)`.
pub fn downsample_block_mean(field: &HeightField, factor_y: usize, factor_x: usize) -> HeightField {
    if factor_y <= 1 && factor_x <= 1 {
        return field.clone();
    }
    let out_h = field.height.div_ceil(factor_y);
    let out_w = field.width.div_ceil(factor_x);
    let mut data = Vec::with_capacity(out_h * out_w);
    for by in 0..out_h {
        let y0 = by * factor_y;
        let y1 = (y0 + factor_y).min(field.height);
        for bx in 0..out_w {
            let x0 = bx * factor_x;
            let x1 = (x0 + factor_x).min(field.width);
            let mut sum = 0.0f32;
            for y in y0..y1 {
                for x in x0..x1 {
                    sum += field.get(y, x);
                }
            }
            data.push(sum / ((y1 - y0) * (x1 - x0)) as f32);
        }
    }
    HeightField {
        width: out_w,
        height: out_h,
        data,
    }
}

/// Isotropic Gaussian blur, separable, reflecting boundary, kernel
/// truncated at 4σ.
pub fn gaussian_blur(field: &HeightField, sigma: f32) -> HeightField {
    let kernel = gaussian_kernel(sigma);
    if kernel.len() <= 1 {
        return field.clone();
    }
    let horizontal = convolve_rows(&field.data, field.width, field.height, &kernel);
    let transposed = transpose(&horizontal, field.width, field.height);
    let vertical = convolve_rows(&transposed, field.height, field.width, &kernel);
    HeightField {
        width: field.width,
        height: field.height,
        data: transpose(&vertical, field.height, field.width),
    }
}

/// Run the full pipeline on a validated pixel array.
///
/// Pure function of its input. The range test looks at the raw input
/// values (all channels), while the division applies to the reduced
/// intensity array.
pub fn generate(pixels: &PixelArray) -> HeightField {
    let mut gray = luma(pixels);
    if pixels.max_value() > 1.0 {
        for v in gray.iter_mut() {
            *v /= 255.0;
        }
    }
    invert(&mut gray);

    let full = HeightField {
        width: pixels.width(),
        height: pixels.height(),
        data: gray,
    };
    let factor_y = (full.height / TARGET_SAMPLES).max(1);
    let factor_x = (full.width / TARGET_SAMPLES).max(1);
    let reduced = downsample_block_mean(&full, factor_y, factor_x);
    debug!(
        "heightfield {}x{} -> {}x{} (factors {}x{})",
        full.width, full.height, reduced.width, reduced.height, factor_x, factor_y
    );
    gaussian_blur(&reduced, SMOOTHING_SIGMA)
}

fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let radius = (4.0 * sigma).round() as i64;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|k| (-(k * k) as f32 / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

// Symmetric reflection about the edge: (d c b a | a b c d | d c b a).
fn reflect(mut i: i64, n: i64) -> usize {
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - i - 1;
        } else {
            return i as usize;
        }
    }
}

fn convolve_rows(data: &[f32], width: usize, height: usize, kernel: &[f32]) -> Vec<f32> {
    let radius = (kernel.len() / 2) as i64;
    let w = width as i64;
    let mut out = Vec::with_capacity(data.len());
    for y in 0..height {
        let row = &data[y * width..(y + 1) * width];
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let src = reflect(x + k as i64 - radius, w);
                acc += row[src] * weight;
            }
            out.push(acc);
        }
    }
    out
}

fn transpose(data: &[f32], width: usize, height: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; data.len()];
    for y in 0..height {
        for x in 0..width {
            out[x * height + y] = data[y * width + x];
        }
    }
    out
}
