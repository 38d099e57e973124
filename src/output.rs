use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::error::{Error, Result};

/// Buffered destination for the generated queries: the file at `path` when
/// one is given (created or truncated), standard output otherwise.
pub fn open(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::CreateOutput {
                path: path.to_owned(),
                source,
            })?;

            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };

    Ok(BufWriter::new(sink))
}
