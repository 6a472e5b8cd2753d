//! Operating-system abstraction for file streams.
//!
//! The pipeline opens every file through this boundary so tests can run it
//! against in-memory streams. Streams are scoped resources: writers are
//! flushed before being dropped on every exit path, so a later phase never
//! reads a partial file.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Opens files for the generation pipeline.
pub trait OperatingSystem {
    /// Opens `path` for writing, truncating an existing file.
    fn open_for_writing(&self, path: &Path) -> io::Result<Box<dyn Write>>;

    /// Opens `path` for reading.
    fn open_for_reading(&self, path: &Path) -> io::Result<Box<dyn Read>>;
}

/// The real filesystem: buffered `std::fs` streams, creating missing parent
/// directories on write.
pub struct LocalOs;

impl OperatingSystem for LocalOs {
    fn open_for_writing(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }

    fn open_for_reading(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}
