//! Error type shared by the corpus loader and the field

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HaikuError {
    /// The law data file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The law data file is not a `{ "laws": [...] }` document.
    #[error("malformed law data: {0}")]
    DataFormat(#[from] serde_json::Error),

    /// No law carries a haiku that may be shown.
    #[error("law corpus holds no displayable haiku")]
    EmptyCorpus,

    /// Sampling gave up before finding a displayable haiku.
    #[error("no eligible haiku after {attempts} attempts")]
    NoEligibleHaiku { attempts: usize },
}

pub type Result<T> = std::result::Result<T, HaikuError>;
