use rand::Rng;
use std::f32::consts::E;
use std::fmt;

/// A dense matrix of `rows x cols` f32 values in one contiguous buffer,
/// column-major: element `(r, c)` lives at offset `r + c * rows`.
///
/// The buffer is private so the layout rule is applied in exactly one place;
/// everything else goes through the indexed accessors or the kernel
/// operations below. Dimensions are fixed at construction and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from an existing column-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Matrix {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
        assert_eq!(
            data.len(),
            rows * cols,
            "buffer length must equal rows * cols"
        );
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> f32 {
        assert!(
            r < self.rows && c < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            r,
            c,
            self.rows,
            self.cols
        );
        self.data[r + c * self.rows]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: f32) {
        assert!(
            r < self.rows && c < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            r,
            c,
            self.rows,
            self.cols
        );
        self.data[r + c * self.rows] = value;
    }

    /// Matrix-vector product: `vec_out[r] = sum over c of self[r,c] * vec_in[c]`.
    ///
    /// `vec_in` must have `cols` elements and `vec_out` must have `rows`
    /// elements; both are caller-owned, nothing is allocated here.
    pub fn mul_vec_into(&self, vec_in: &[f32], vec_out: &mut [f32]) {
        assert_eq!(
            vec_in.len(),
            self.cols,
            "input vector length must equal matrix cols"
        );
        assert_eq!(
            vec_out.len(),
            self.rows,
            "output vector length must equal matrix rows"
        );

        for r in 0..self.rows {
            let mut sum = 0.0;
            for c in 0..self.cols {
                sum += self.data[r + c * self.rows] * vec_in[c];
            }
            vec_out[r] = sum;
        }
    }

    /// Writes the transpose into `out`: `out[n,m] = self[m,n]`.
    ///
    /// `out` must already be shaped `cols x rows`.
    pub fn transpose_into(&self, out: &mut Matrix) {
        assert_eq!(
            (out.rows, out.cols),
            (self.cols, self.rows),
            "transpose destination must be cols x rows"
        );

        for m in 0..self.rows {
            for n in 0..self.cols {
                out.data[n + m * self.cols] = self.data[m + n * self.rows];
            }
        }
    }

    /// Fills every element independently and uniformly from `[-0.5, 0.5)`.
    ///
    /// The generator is caller-supplied; seed it once per run if reproducible
    /// weights are needed.
    pub fn randomise<R: Rng>(&mut self, rng: &mut R) {
        for value in self.data.iter_mut() {
            *value = rng.gen::<f32>() - 0.5;
        }
    }

    /// Elementwise in-place update: `self[i] += delta[i] * scale`.
    pub fn add_scaled(&mut self, delta: &Matrix, scale: f32) {
        assert_eq!(
            (self.rows, self.cols),
            (delta.rows, delta.cols),
            "matrices must have identical shape"
        );

        for (value, d) in self.data.iter_mut().zip(delta.data.iter()) {
            *value += d * scale;
        }
    }
}

/// Row-major debug rendering of the column-major buffer, one `| .. |` line
/// per row with six fixed decimals per element. Diagnostic only.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            write!(f, "| ")?;
            for c in 0..self.cols {
                write!(f, "{:.6} ", self.data[r + c * self.rows])?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

/// Column vector times row vector: `out[r,c] = col_vec[r] * row_vec[c]`.
///
/// ```text
/// |1|           | 1x2 1x3 1x4 |   | 2 3 4  |
/// |2| [2 3 4] = | 2x2 2x3 2x4 | = | 4 6 8  |
/// |3|           | 3x2 3x3 3x4 |   | 6 9 12 |
/// ```
///
/// `out` must already be shaped `col_vec.len() x row_vec.len()`.
pub fn outer_product_into(col_vec: &[f32], row_vec: &[f32], out: &mut Matrix) {
    assert_eq!(
        out.rows,
        col_vec.len(),
        "destination rows must equal column vector length"
    );
    assert_eq!(
        out.cols,
        row_vec.len(),
        "destination cols must equal row vector length"
    );

    for c in 0..out.cols {
        for r in 0..out.rows {
            out.data[r + c * out.rows] = col_vec[r] * row_vec[c];
        }
    }
}

/// Applies the logistic function `1 / (1 + e^-x)` to every element.
///
/// Evaluated with the full-precision `std::f32::consts::E`; a truncated
/// constant such as 2.71828 shifts results around the fifth decimal.
pub fn sigmoid_in_place(values: &mut [f32]) {
    for value in values.iter_mut() {
        *value = 1.0 / (1.0 + E.powf(-*value));
    }
}
