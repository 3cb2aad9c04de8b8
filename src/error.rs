// Failure kinds that abort a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop icon generation.
///
/// A source that fails to parse is deliberately not represented here: that
/// size is skipped and the run continues, so parse failure never reaches a
/// caller as an error value.
#[derive(Debug, Error)]
pub enum Error {
    /// The parsed drawable could not be rasterized at the computed size.
    #[error("cannot rasterize {width}x{height} bitmap for {dimension}px icon")]
    Render {
        dimension: u32,
        width: u32,
        height: u32,
    },

    /// The output PNG could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
