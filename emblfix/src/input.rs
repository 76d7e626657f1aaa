use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

/// Opens `path` for line reading. `*.gz` files are decompressed on the fly.
pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    debug!("Opening {:?}", path);
    let file = File::open(path)?;
    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
    debug!("Creating {:?}", path.as_ref());
    File::create(path).map(BufWriter::new)
}
