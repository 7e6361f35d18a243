use std::{io, path::PathBuf};
use thiserror::Error;

/// Building and rendering a document can't fail; only handing the output to the outside world
/// can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not write svg to {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
