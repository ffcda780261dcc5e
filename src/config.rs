use thiserror::Error;

/// The rectangular sub-area of the grid seeded with non-zero values.
/// Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top_left: (usize, usize),
    pub bottom_right: (usize, usize),
}

impl Region {
    pub fn contains(&self, i: usize, j: usize) -> bool {
        let (x0, y0) = self.top_left;
        let (x1, y1) = self.bottom_right;

        i >= x0 && i <= x1 && j >= y0 && j <= y1
    }
}

/// Everything that shapes a run: the grid dimensions, the non-empty region,
/// and the tile geometry parameters. The derived quantities (overlap, steps,
/// tile counts) live in [`Geometry`] and are computed by [`Config::geometry`],
/// which is also where all validation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub region: Region,

    pub kernel_size: usize,
    pub stride: usize,
    pub tile_width: usize,
    pub tile_height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 30,
            cols: 30,
            region: Region {
                top_left: (12, 12),
                bottom_right: (20, 20),
            },
            kernel_size: 3,
            stride: 1,
            tile_width: 4,
            tile_height: 7,
        }
    }
}

/// Tile geometry derived from a [`Config`], computed once before iteration.
///
/// `overlap` is signed: a stride larger than the kernel gives a negative
/// overlap, i.e. gaps between adjacent tiles, which is legal. Only a
/// non-positive step is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub rows: usize,
    pub cols: usize,
    pub tile_width: usize,
    pub tile_height: usize,

    pub overlap: isize,
    pub step_x: usize,
    pub step_y: usize,
    pub tiles_x: usize,
    pub tiles_y: usize,
}

/// Errors from validating a [`Config`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid has no cells.
    #[error("grid dimensions must be positive (rows={0}, cols={1})")]
    EmptyGrid(usize, usize),
    /// A tile dimension is zero.
    #[error("tile dimensions must be positive (width={0}, height={1})")]
    ZeroTileDim(usize, usize),
    /// The non-empty region's corners are unordered or fall outside the grid.
    #[error("non-empty region ({0}, {1})..=({2}, {3}) does not fit a {4}x{5} grid")]
    RegionOutOfBounds(usize, usize, usize, usize, usize, usize),
    /// A tile dimension does not exceed the overlap, so the tile step is not
    /// positive and the tile count is undefined.
    #[error("tile step must be positive, got step_x={0}, step_y={1} with overlap {2}")]
    NonPositiveStep(isize, isize, isize),
}

impl Config {
    /// Validate the configuration and derive the tile geometry.
    ///
    /// Fails fast, before any grid is allocated: the scan itself has no error
    /// paths and relies on the bounds established here.
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid(self.rows, self.cols));
        }

        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(ConfigError::ZeroTileDim(self.tile_width, self.tile_height));
        }

        let (x0, y0) = self.region.top_left;
        let (x1, y1) = self.region.bottom_right;

        if x0 > x1 || y0 > y1 || x1 >= self.rows || y1 >= self.cols {
            return Err(ConfigError::RegionOutOfBounds(
                x0, y0, x1, y1, self.rows, self.cols,
            ));
        }

        let overlap = self.kernel_size as isize - self.stride as isize;
        let step_x = self.tile_height as isize - overlap;
        let step_y = self.tile_width as isize - overlap;

        if step_x <= 0 || step_y <= 0 {
            return Err(ConfigError::NonPositiveStep(step_x, step_y, overlap));
        }

        let step_x = step_x as usize;
        let step_y = step_y as usize;

        Ok(Geometry {
            rows: self.rows,
            cols: self.cols,
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            overlap,
            step_x,
            step_y,
            tiles_x: (self.rows + step_x - 1) / step_x,
            tiles_y: (self.cols + step_y - 1) / step_y,
        })
    }
}
