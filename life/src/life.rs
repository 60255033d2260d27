use crate::pattern::Pattern;

/// A toroidal Game of Life grid.
///
/// Cells are stored row-major as 0/1 bytes, `index = x + y * width`. Both
/// axes wrap, so any `i32` pair names a cell and there is no out-of-bounds
/// condition anywhere in the API.
pub struct Life {
    width: i32,
    height: i32,
    cells: Vec<u8>,

    // Second buffer for stepping, swapped each generation so we never read
    // and write the same cells in one pass.
    scratch: Vec<u8>,
}

impl Life {
    /// Creates a grid with every cell dead.
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let n_cells = (width as usize) * (height as usize);

        Self {
            width,
            height,
            cells: vec![0; n_cells],
            scratch: vec![0; n_cells],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        let x = x.rem_euclid(self.width);
        let y = y.rem_euclid(self.height);

        (x + y * self.width) as usize
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(x, y)] == 1
    }

    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive as u8;
    }

    /// Read-only view of the current generation, row-major 0/1 bytes.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Fills the grid with a 50/50 random soup.
    pub fn clear_random(&mut self, rng: &mut impl rand::RngCore) {
        for cell in &mut self.cells {
            *cell = (rng.next_u32() & 1) as u8;
        }
    }

    /// Advances the grid one generation and returns how many cells changed.
    ///
    /// A return of 0 means the grid is static and the caller can skip
    /// redrawing this tick.
    pub fn step(&mut self) -> usize {
        let mut n_updated = 0;

        for y in 0..self.height {
            for x in 0..self.width {
                let mut live_neighbors = 0;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        live_neighbors += self.cells[self.index(x + dx, y + dy)];
                    }
                }

                let idx = (x + y * self.width) as usize;
                let alive = self.cells[idx];
                let next = match live_neighbors {
                    3 => 1,
                    2 => alive,
                    _ => 0,
                };

                self.scratch[idx] = next;
                if next != alive {
                    n_updated += 1;
                }
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);

        n_updated
    }

    /// Maps a display-surface pixel coordinate to the logical cell under it.
    ///
    /// Floor division, so negative pixel offsets (clicks in window padding)
    /// map to negative cells instead of rounding toward zero. The surface
    /// size is taken per call and never cached, so surface resizes are
    /// honored.
    pub fn pixel_to_cell(
        &self,
        pixel_x: i32,
        pixel_y: i32,
        surface_width: i32,
        surface_height: i32,
    ) -> (i32, i32) {
        assert!(
            surface_width > 0 && surface_height > 0,
            "surface dimensions must be positive, got {surface_width}x{surface_height}"
        );

        let cell_x = (pixel_x * self.width).div_euclid(surface_width);
        let cell_y = (pixel_y * self.height).div_euclid(surface_height);

        (cell_x, cell_y)
    }

    /// Stamps `pattern` onto the grid, centered on the cell under the given
    /// display-surface pixel.
    ///
    /// Live pattern cells are ORed in; dead pattern cells never clear a grid
    /// cell. All coordinates wrap, so a pattern larger than the grid simply
    /// overlaps itself.
    pub fn place_pattern(
        &mut self,
        pattern: &Pattern,
        pixel_x: i32,
        pixel_y: i32,
        surface_width: i32,
        surface_height: i32,
    ) {
        let (cell_x, cell_y) = self.pixel_to_cell(pixel_x, pixel_y, surface_width, surface_height);

        let x0 = cell_x - pattern.width() / 2;
        let y0 = cell_y - pattern.height() / 2;

        for y in 0..pattern.height() {
            for x in 0..pattern.width() {
                if pattern.get(x, y) {
                    self.set(x0 + x, y0 + y, true);
                }
            }
        }
    }
}
