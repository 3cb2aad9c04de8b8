// Static conversion table: one output per Android launcher icon density.

use std::path::PathBuf;

/// Nominal DPI the vector source is authored at.
pub const BASE_DPI: f32 = 96.0;

/// Pixel size of the source artwork at `BASE_DPI`.
pub const REFERENCE_SIZE: u32 = 512;

/// Fixed path to the vector source, relative to the project root.
pub const SOURCE_PATH: &str = "assets/icon.svg";

/// Standard density bucket names, smallest first.
pub const DENSITY_BUCKETS: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

/// Launcher icon pixel size per bucket, same order as `DENSITY_BUCKETS`.
pub const DENSITY_SIZES: [u32; 5] = [48, 72, 96, 144, 192];

/// One output icon: target pixel size, density bucket, destination path.
pub struct SizeSpec {
    pub dimension: u32,
    pub bucket: &'static str,
    pub output: PathBuf,
}

/// The five launcher icon outputs, in increasing density order.
pub fn icon_sizes() -> Vec<SizeSpec> {
    DENSITY_BUCKETS
        .into_iter()
        .zip(DENSITY_SIZES)
        .map(|(bucket, dimension)| SizeSpec {
            dimension,
            bucket,
            output: PathBuf::from(format!("res/mipmap-{bucket}/ic_launcher.png")),
        })
        .collect()
}

/// DPI to render at so a `REFERENCE_SIZE` source comes out at `dimension` pixels.
pub fn target_dpi(dimension: u32) -> f32 {
    BASE_DPI * dimension as f32 / REFERENCE_SIZE as f32
}
