// One-shot generator for the Android launcher icon PNGs.

mod config;
mod error;
mod rasterize;

use std::path::Path;
use std::process;

fn main() {
    let result = rasterize::generate_icons(Path::new(config::SOURCE_PATH), &config::icon_sizes());
    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}
