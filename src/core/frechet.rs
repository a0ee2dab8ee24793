use crate::core::distance::distance;
use crate::models::Point;

/// Number of rotational offsets tried per closed curve
const OFFSET_DIVISIONS: usize = 8;

/// Cyclic start offsets tried by the order-sensitive metrics
///
/// Every `len / 8`-th index (at least every index), starting at 0. Sampling
/// trades rotation precision for keeping the search at O(n²) per offset
/// instead of a full O(n³) cyclic search.
pub fn rotation_offsets(len: usize) -> impl Iterator<Item = usize> {
    let step = (len / OFFSET_DIVISIONS).max(1);
    (0..len).step_by(step)
}

/// Coupling-distance table for the discrete Fréchet recurrence
///
/// Allocated once and refilled for every offset trial, so an offset search
/// costs a single allocation.
#[derive(Debug, Default)]
pub struct FrechetTable {
    cols: usize,
    cells: Vec<f64>,
}

impl FrechetTable {
    pub fn with_capacity(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: Vec::with_capacity(rows * cols),
        }
    }

    fn reset(&mut self, rows: usize, cols: usize) {
        self.cols = cols;
        self.cells.clear();
        self.cells.resize(rows * cols, f64::INFINITY);
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.cols + j]
    }

    /// Discrete Fréchet distance between `a` and `b` read from index `offset`
    ///
    /// The table is filled row-major:
    /// `ca[i][j] = max(d(a[i], b[j]), min(ca[i-1][j], ca[i-1][j-1], ca[i][j-1]))`
    /// with row and column 0 carried as running maxima.
    pub fn compute(&mut self, a: &[Point], b: &[Point], offset: usize) -> f64 {
        if a.is_empty() || b.is_empty() {
            return f64::INFINITY;
        }

        let (rows, cols) = (a.len(), b.len());
        self.reset(rows, cols);

        for (i, pa) in a.iter().enumerate() {
            for j in 0..cols {
                let d = distance(pa, &b[(j + offset) % cols]);
                // f64::max drops a NaN operand, which would let the coupling skip this cell
                let d = if d.is_nan() { f64::INFINITY } else { d };
                let coupling = match (i, j) {
                    (0, 0) => d,
                    (0, _) => d.max(self.at(0, j - 1)),
                    (_, 0) => d.max(self.at(i - 1, 0)),
                    _ => {
                        let reachable = self
                            .at(i - 1, j)
                            .min(self.at(i - 1, j - 1))
                            .min(self.at(i, j - 1));
                        d.max(reachable)
                    }
                };
                self.cells[i * cols + j] = coupling;
            }
        }

        self.at(rows - 1, cols - 1)
    }
}

/// Discrete Fréchet distance with both sequences read from their first point
///
/// Infinite when either sequence is empty.
pub fn discrete_frechet(a: &[Point], b: &[Point]) -> f64 {
    FrechetTable::with_capacity(a.len(), b.len()).compute(a, b, 0)
}

/// Minimum discrete Fréchet distance over sampled cyclic rotations of `b`
///
/// Approximates the cyclic Fréchet distance of two closed curves whose point
/// sequences start at different places. Infinite when either sequence is empty.
pub fn cyclic_frechet(a: &[Point], b: &[Point]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }

    let mut table = FrechetTable::with_capacity(a.len(), b.len());
    rotation_offsets(b.len())
        .map(|offset| table.compute(a, b, offset))
        .fold(f64::INFINITY, f64::min)
}
