//! Grid module - the playfield and row clearing
//!
//! The grid is a 10x20 matrix where each cell is empty or tagged with the kind of
//! the piece that filled it. Storage is a flat row-major array; dimensions never
//! change after construction.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};

/// Row indices removed by one clear pass, in the order they were found (top to bottom)
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Row-major 2D view of the grid contents
pub type GridRows = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Build a grid from row-major contents
    pub fn from_rows(rows: &GridRows) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            grid.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(row);
        }
        grid
    }

    /// Calculate flat index from (x, y); `None` when out of bounds
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if (x, y) lies outside `[0, W) x [0, H)`
    pub fn is_out_of_bounds(x: i16, y: i16) -> bool {
        x < 0 || x >= BOARD_WIDTH as i16 || y < 0 || y >= BOARD_HEIGHT as i16
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Cells of row `y`, or `None` if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Indices of all full rows, scanned top to bottom
    pub fn full_rows(&self) -> ClearedRows {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove row `y` by shifting every row strictly above it down by one.
    /// Row 0 becomes empty. Returns false if `y` is out of bounds.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }

        let width = BOARD_WIDTH as usize;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
        true
    }

    /// Clear all full rows and return their indices in the order found (top to bottom).
    ///
    /// Rows are removed one at a time in that order. Removing a row only moves
    /// rows above it, so the indices of full rows further down stay valid.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let rows = self.full_rows();
        for &y in &rows {
            self.remove_row(y);
        }
        rows
    }

    /// Fill every cell of row `y` with `kind`; returns false if out of bounds
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(Some(kind));
        true
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array
    pub fn write_rows(&self, out: &mut GridRows) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
    }

    /// Convert to a row-major 2D array
    pub fn to_rows(&self) -> GridRows {
        let mut out = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.write_rows(&mut out);
        out
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(9, 0), Some(9));
        assert_eq!(Grid::index(0, 1), Some(10));
        assert_eq!(Grid::index(9, 19), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
        assert_eq!(Grid::index(i16::MIN, i16::MAX), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();

        grid.set(0, 0, Some(PieceKind::I));
        grid.set(5, 10, Some(PieceKind::T));

        assert_eq!(grid.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(grid.get(5, 10), Some(Some(PieceKind::T)));

        assert_eq!(grid.cells[0], Some(PieceKind::I));
        assert_eq!(grid.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_grid_rows_roundtrip() {
        let mut rows = [[None; 10]; 20];
        rows[5][3] = Some(PieceKind::O);
        rows[10][7] = Some(PieceKind::L);

        let grid = Grid::from_rows(&rows);
        assert_eq!(grid.to_rows(), rows);
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_remove_top_row_just_empties_it() {
        let mut grid = Grid::new();
        grid.fill_row(0, PieceKind::S);
        grid.set(0, 1, Some(PieceKind::Z));

        assert!(grid.remove_row(0));
        assert_eq!(grid.row(0).unwrap(), &[None; 10]);
        assert_eq!(grid.get(0, 1), Some(Some(PieceKind::Z)));
        assert!(!grid.remove_row(20));
    }

    #[test]
    fn test_full_rows_top_to_bottom() {
        let mut grid = Grid::new();
        grid.fill_row(17, PieceKind::I);
        grid.fill_row(4, PieceKind::J);
        grid.fill_row(19, PieceKind::T);

        assert_eq!(grid.full_rows().as_slice(), &[4, 17, 19]);
    }
}
