use std::io::stdout;

use log::debug;
use log::info;

use tilescan::config::Config;
use tilescan::grid;
use tilescan::report;
use tilescan::scan;

fn main() -> Result<(), String> {
    env_logger::init();

    println!("Tile selection module");

    let config = Config::default();
    let geometry = config.geometry().map_err(|e| e.to_string())?;

    debug!(
        "geometry: {}x{} tiles, step ({}, {}), overlap {}",
        geometry.tiles_x, geometry.tiles_y, geometry.step_x, geometry.step_y, geometry.overlap
    );

    let mut rng = rand::thread_rng();
    let input = grid::generate(&config, &mut rng);

    #[cfg(feature = "parallel")]
    let tiles = scan::par_scan(&input, &geometry);

    #[cfg(not(feature = "parallel"))]
    let tiles = scan::scan(&input, &geometry);

    info!(
        "scanned {} tiles, {} active",
        tiles.len(),
        report::active(&tiles).count()
    );

    report::report(&tiles, &mut stdout().lock()).map_err(|e| e.to_string())?;

    Ok(())
}
