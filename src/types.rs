/// The value of a single grid cell. Zero means "empty"; every generated
/// non-empty cell is in `1..=grid::MAX_CELL`.
pub type Cell = u32;

/// A tile's position in the tile table, `(tx, ty)`.
pub type TileIndex = (usize, usize);
