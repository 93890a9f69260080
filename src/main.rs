use geohash_rs::{GeohashCell, GeohashError, bbox_corners, neighbors};
use serde_json::json;

fn main() -> Result<(), GeohashError> {
    env_logger::init();

    let lat = 57.64911;
    let lon = 10.40744;

    let cell = GeohashCell::from_lat_lon(lat, lon, 11)?;

    println!("Geohash: {}", cell.geohash);
    println!("Center: ({}, {})", cell.center().y(), cell.center().x());

    let output = json!({
        "geohash": cell.geohash,
        "bbox": bbox_corners(&cell.bbox),
        "neighbors": neighbors(&cell.geohash)?,
    });
    let text =
        serde_json::to_string_pretty(&output).map_err(|e| GeohashError::IoError(e.to_string()))?;
    println!("{}", text);

    Ok(())
}
