// SVG parsing and PNG rasterization.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::{self, SizeSpec};
use crate::error::Error;

/// Parse the vector source into a render tree.
///
/// `None` covers every way the source can fail to yield a drawable: missing
/// file, unreadable file, malformed SVG. Callers treat it as "nothing to
/// draw" for the current size.
fn parse_source(path: &Path) -> Option<usvg::Tree> {
    let data = fs::read(path).ok()?;
    usvg::Tree::from_data(&data, &usvg::Options::default()).ok()
}

/// Rasterize the tree at the DPI computed for `dimension`.
///
/// The scale is uniform, so a non-square source keeps its aspect ratio and
/// only a `REFERENCE_SIZE`-pixel source comes out exactly square at
/// `dimension` pixels.
fn render(tree: &usvg::Tree, dimension: u32) -> Result<tiny_skia::Pixmap, Error> {
    let scale = config::target_dpi(dimension) / config::BASE_DPI;
    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(Error::Render {
        dimension,
        width,
        height,
    })?;
    resvg::render(
        tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Encode the bitmap as PNG and write it, overwriting any previous file.
fn write_png(pixmap: &tiny_skia::Pixmap, path: &Path) -> Result<(), Error> {
    let data = pixmap.encode_png().map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::Other, e),
    })?;
    fs::write(path, data).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert the source SVG once per entry in `specs`, in order.
///
/// A source that cannot be parsed skips just that entry, silently; the loop
/// carries on and the completion notice still prints. A render or write
/// failure aborts immediately, leaving any previously written outputs in
/// place. One confirmation line per written file goes to stdout.
pub fn generate_icons(source: &Path, specs: &[SizeSpec]) -> Result<(), Error> {
    for spec in specs {
        // Re-read and re-parse per size; the file is small and a run is
        // one-shot, so caching buys nothing.
        let Some(tree) = parse_source(source) else {
            continue;
        };
        let pixmap = render(&tree, spec.dimension)?;
        write_png(&pixmap, &spec.output)?;
        println!(
            "Created {0}x{0} PNG: {1}",
            spec.dimension,
            spec.output.display()
        );
    }
    println!("All icons generated successfully!");
    Ok(())
}
