use ndarray::s;
use ndarray::Array2;
use ndarray::ArrayView2;

#[cfg(feature = "parallel")]
use ndarray::Zip;

use crate::config::Geometry;
use crate::types::Cell;

/// Per-tile statistics. Zeroed on creation, written exactly once by the
/// scan, and never mutated again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TileStats {
    /// True iff the tile's window contains at least one non-zero cell.
    pub active: bool,
    pub non_empty: usize,
    pub empty: usize,
}

/// Per-tile statistics indexed by `(tx, ty)`.
pub type TileTable = Array2<TileStats>;

/// The grid window covered by tile `(tx, ty)`, as half-open ranges
/// `(start_x..end_x, start_y..end_y)`. Clamped at the bottom/right edge, so
/// the last row/column of tiles may cover fewer cells than a full tile.
fn window(geometry: &Geometry, tx: usize, ty: usize) -> (usize, usize, usize, usize) {
    let start_x = tx * geometry.step_x;
    let start_y = ty * geometry.step_y;
    let end_x = (start_x + geometry.tile_height).min(geometry.rows);
    let end_y = (start_y + geometry.tile_width).min(geometry.cols);

    (start_x, end_x, start_y, end_y)
}

fn scan_tile(grid: &ArrayView2<Cell>, geometry: &Geometry, tx: usize, ty: usize) -> TileStats {
    let (start_x, end_x, start_y, end_y) = window(geometry, tx, ty);

    let win = grid.slice(s![start_x..end_x, start_y..end_y]);

    let non_empty = win.iter().filter(|&&cell| cell != 0).count();
    let empty = win.len() - non_empty;

    TileStats {
        active: non_empty > 0,
        non_empty,
        empty,
    }
}

/// Walk the grid in overlapping tiles and count zero versus non-zero cells
/// per tile. Pure function of the grid and the geometry: scanning the same
/// grid twice yields identical tables.
///
/// Adjacent windows overlap by `geometry.overlap` cells, so a cell may be
/// counted by several tiles. Total work is
/// `O(tiles_x * tiles_y * tile_height * tile_width)`, not `O(rows * cols)`.
pub fn scan(grid: &Array2<Cell>, geometry: &Geometry) -> TileTable {
    let grid = grid.view();

    Array2::from_shape_fn((geometry.tiles_x, geometry.tiles_y), |(tx, ty)| {
        scan_tile(&grid, geometry, tx, ty)
    })
}

/// Parallel-for variant of [`scan`] over the `(tx, ty)` index space. Tiles
/// are independent apart from read-only sharing of the grid, and each output
/// cell is written by exactly one task, so no synchronization is needed
/// beyond the join at the end. Produces the same table as [`scan`].
#[cfg(feature = "parallel")]
pub fn par_scan(grid: &Array2<Cell>, geometry: &Geometry) -> TileTable {
    let mut table = TileTable::default((geometry.tiles_x, geometry.tiles_y));
    let grid = grid.view();

    Zip::indexed(&mut table).par_for_each(|(tx, ty), stats| {
        *stats = scan_tile(&grid, geometry, tx, ty);
    });

    table
}
