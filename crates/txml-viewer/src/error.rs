use std::io;
use std::path::PathBuf;

/// Failures that stop the viewer before or while opening its window.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to read {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no usable font among {tried} candidate(s)")]
    NoFont { tried: usize },

    #[error("{0:#}")]
    Window(anyhow::Error),
}
