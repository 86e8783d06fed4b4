//! Pieces module - the shape catalog and matrix rotation
//!
//! Shapes are small binary matrices stored in a fixed 4x4 array with explicit
//! width and height. Rotation is a pure index remap into a fresh array with
//! swapped dimensions; catalog entries are `const` and are only ever copied.

/// Side of the backing array; every tetromino fits inside it in any orientation.
pub const SHAPE_MAX: usize = 4;

/// An immutable binary shape matrix.
///
/// Only the top-left `height` x `width` region is meaningful; everything
/// outside it is always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from literal rows (`1` filled, `0` empty).
    ///
    /// Panics at compile time (in `const` context) if the rows exceed 4x4 or are ragged.
    pub const fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        assert!(height > 0 && height <= SHAPE_MAX);
        let width = rows[0].len();
        assert!(width > 0 && width <= SHAPE_MAX);

        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        let mut y = 0;
        while y < height {
            assert!(rows[y].len() == width);
            let mut x = 0;
            while x < width {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }

        Self {
            cells,
            width: width as u8,
            height: height as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at column `x`, row `y` is filled (false outside the matrix)
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Offsets `(x, y)` of every filled cell, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (w, h) = (self.width as usize, self.height as usize);
        (0..h).flat_map(move |y| {
            (0..w)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise.
    ///
    /// Equivalent to reversing the row order and then transposing:
    /// `rotated[i][j] = self[height - 1 - j][i]`. The result is `height` wide
    /// and `width` tall.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (i, row) in cells.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - j][i];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }

    /// Rows as `0`/`1` vectors, for tests and debugging
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| u8::from(self.cells[y][x]))
                    .collect()
            })
            .collect()
    }
}

/// The seven catalog shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    Z,
    S,
    L,
    J,
    O,
}

impl ShapeKind {
    /// Number of catalog entries (7).
    pub const LEN: usize = 7;

    /// Catalog order; spawn draws an index into this array.
    pub const ALL: [ShapeKind; Self::LEN] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
    ];

    /// A fresh copy of this kind's spawn shape.
    pub fn shape(self) -> Shape {
        SHAPES[self as usize]
    }
}

const SHAPES: [Shape; ShapeKind::LEN] = [
    // I
    Shape::from_rows(&[&[1, 1, 1, 1]]),
    // T
    Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
    // Z
    Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    // S
    Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
    // L
    Shape::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
    // J
    Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
    // O
    Shape::from_rows(&[&[1, 1], &[1, 1]]),
];
