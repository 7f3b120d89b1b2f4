//! Single-channel raster image with convex polygon scan-fill.

/// Pixel coordinate: `x` is the column, `y` is the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PixelCoord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl PixelCoord {
    /// Create from column and row.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel containing fractional coordinates `(x, y)`.
    ///
    /// Non-finite inputs collapse to 0 and values beyond `i32` saturate.
    #[inline]
    pub fn floor(x: f64, y: f64) -> Self {
        Self {
            x: x.floor() as i32,
            y: y.floor() as i32,
        }
    }
}

/// Row-major image of `rows × cols` pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Raster<T> {
    /// Create an image with every pixel set to `value`.
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Raw row-major pixel buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Pixel value, if in bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set one pixel. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
        }
    }

    /// Fill a convex polygon, boundary included, clipped to the image.
    ///
    /// Each row between the lowest and highest vertex is filled from the
    /// pixel holding the leftmost edge crossing to the pixel holding the
    /// rightmost one, so non-convex input is
    /// filled as its row-wise hull. Degenerate polygons (one point, or
    /// collinear points) fill the pixels on their segment.
    ///
    /// Returns the number of pixels written.
    pub fn fill_convex_poly(&mut self, vertices: &[PixelCoord], value: T) -> usize {
        if vertices.is_empty() || self.rows == 0 || self.cols == 0 {
            return 0;
        }

        let (y_min, y_max) = vertices
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), v| (lo.min(v.y), hi.max(v.y)));
        let row_start = y_min.max(0);
        let row_end = y_max.min(self.rows as i32 - 1);
        let last_col = (self.cols - 1) as f64;

        let mut written = 0;
        for y in row_start..=row_end {
            let Some((left, right)) = scanline_span(vertices, y) else {
                continue;
            };
            let left = left.floor().max(0.0);
            let right = right.floor().min(last_col);
            if left > right {
                continue;
            }

            let row_offset = y as usize * self.cols;
            let (left, right) = (left as usize, right as usize);
            self.data[row_offset + left..=row_offset + right].fill(value);
            written += right - left + 1;
        }
        written
    }
}

/// Leftmost and rightmost x where the polygon outline crosses row `y`.
fn scanline_span(vertices: &[PixelCoord], y: i32) -> Option<(f64, f64)> {
    let y = y as f64;
    let mut left = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;

    for (k, a) in vertices.iter().enumerate() {
        let b = vertices[(k + 1) % vertices.len()];
        let (ax, ay) = (a.x as f64, a.y as f64);
        let (bx, by) = (b.x as f64, b.y as f64);
        if y < ay.min(by) || y > ay.max(by) {
            continue;
        }

        if ay == by {
            // Horizontal edge: both endpoints lie on the row
            left = left.min(ax.min(bx));
            right = right.max(ax.max(bx));
        } else {
            let x = ax + (y - ay) / (by - ay) * (bx - ax);
            left = left.min(x);
            right = right.max(x);
        }
    }

    (left <= right).then_some((left, right))
}
