use std::path::PathBuf;

use thiserror::Error;

use crate::social::user::Name;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown user '{0}'")]
    UnknownUser(Name),

    #[error("failed to read network from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode graph snapshot")]
    Ron(#[from] ron::error::SpannedError),

    #[error("failed to encode graph snapshot")]
    RonWrite(#[from] ron::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
