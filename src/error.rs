use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskdeckError {
    #[error("Invalid server URL '{0}'.\n\nPass a full URL like http://localhost:5000 via --server or the config file.")]
    InvalidServerUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
