use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to write rule groups to {path}: {source}")]
    DestinationUnwritable { path: PathBuf, source: io::Error },
}

/// Replaces whatever is at `path` with `contents`. The write is not atomic, a
/// failure halfway through leaves a partial file behind.
pub fn write(path: &Path, contents: &str) -> Result<(), Error> {
    let unwritable = |source: io::Error| Error::DestinationUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(unwritable)?;
    file.write_all(contents.as_bytes()).map_err(unwritable)?;
    file.flush().map_err(unwritable)?;

    return Ok(());
}
