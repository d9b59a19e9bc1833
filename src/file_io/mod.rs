// file_io/mod.rs

use crate::errors::Result;
use bzip2::read::BzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Opens `path` for reading. `-` reads stdin; a `.bz2` extension is decompressed on the fly.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path)?; // io::Error automatically converted by #[from]
    match path.extension().and_then(|s| s.to_str()) {
        Some("bz2") => Ok(Box::new(BufReader::new(BzDecoder::new(file)))),
        _ => Ok(Box::new(BufReader::new(file))),
    }
}
