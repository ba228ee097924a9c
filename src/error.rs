use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripTarError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive not found: {path}")]
    ArchiveNotFound { path: String },

    #[error("Failed to open archive {path}: {source}")]
    ArchiveOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read archive stream: {source}")]
    ArchiveRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for StripTarError {
    fn user_message(&self) -> String {
        match self {
            StripTarError::ArchiveNotFound { path } => {
                format!("Archive not found: {}", path)
            }
            StripTarError::ArchiveOpen { path, source } => {
                format!("Cannot open archive {}: {}", path, source)
            }
            StripTarError::ArchiveRead { source } => {
                format!("Error reading archive: {}", source)
            }
            StripTarError::Write { path, source } => {
                format!("Cannot write {}: {}", path, source)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            StripTarError::ArchiveNotFound { .. } => Some(
                "Check that the archive path is correct and the file exists.".to_string(),
            ),
            StripTarError::ArchiveOpen { .. } => Some(
                "Ensure you have read permission for the archive file.".to_string(),
            ),
            StripTarError::ArchiveRead { .. } => Some(
                "The archive may be corrupt, truncated, or its compression may not match \
                 its filename suffix (.tar.xz/.txz for xz, .tar.gz/.tgz for gzip)."
                    .to_string(),
            ),
            StripTarError::Write { .. } => Some(
                "Ensure the destination is writable and the disk is not full.".to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StripTarError>;
