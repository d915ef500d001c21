/// Generated terrain heights: a 2D row-major grid of samples in [0, 1].
///
/// Inverted relative to the source image (dark stain regions are high
/// ground), downsampled and smoothed by the generator. Never mutated after
/// creation; every new input produces a fresh field.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>, // row-major, len = width * height
}

impl HeightField {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Largest sample value. Zero-variance fields are legal, so this may
    /// equal the minimum.
    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Copy the samples out as nested rows, the shape figure traces take.
    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.data.chunks(self.width).map(<[f32]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_and_indexing_agree() {
        let field = HeightField {
            width: 3,
            height: 2,
            data: vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5],
        };
        let rows = field.to_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![0.3, 0.4, 0.5]);
        assert_eq!(field.get(1, 2), 0.5);
        assert_eq!(field.max(), 0.5);
    }
}
