use std::io;
use std::io::Write;

use crate::scan::TileStats;
use crate::scan::TileTable;
use crate::types::TileIndex;

/// Active tiles in report order: row-major, `tx` ascending, then `ty`.
pub fn active(table: &TileTable) -> impl Iterator<Item = (TileIndex, &TileStats)> + '_ {
    table.indexed_iter().filter(|(_, stats)| stats.active)
}

/// Write the statistics section to `out`: a blank line, the section header,
/// then one line per active tile. Inactive tiles are suppressed entirely.
pub fn report<W>(table: &TileTable, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out)?;
    writeln!(out, "Tile statistics (active tiles and pixel counts):")?;

    for ((tx, ty), stats) in active(table) {
        writeln!(
            out,
            "Tile ({}, {}) non-empty: {}, empty: {}",
            tx, ty, stats.non_empty, stats.empty
        )?;
    }

    Ok(())
}
