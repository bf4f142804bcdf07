use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("Duplicate version identifier: {0}")]
    DuplicateVersion(String),

    #[error("No version segment found in URL: {0}")]
    NoVersionSegment(String),
}
