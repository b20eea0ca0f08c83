use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignitizeError {
    #[error("Invalid usage: {0}")]
    Usage(String),
    #[error("Error opening pdf: {0}")]
    InvalidDocument(#[source] lopdf::Error),
    #[error("Cannot signitize encrypted document")]
    Encrypted,
    #[error("No pages found in pdf")]
    NoPages,
    #[error("Error getting page {0} from source document")]
    MissingPage(usize),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Cannot create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing file {path:?}: {source}")]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Coarse failure category, used by the CLI to pick an exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments or options; nothing was read or written
    Usage,
    /// The source document could not be opened, unlocked or read
    InputDocument,
    /// An output directory or file could not be created
    Output,
}

impl SignitizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignitizeError::Usage(_) | SignitizeError::Config(_) => ErrorKind::Usage,
            SignitizeError::InvalidDocument(_)
            | SignitizeError::Encrypted
            | SignitizeError::NoPages
            | SignitizeError::MissingPage(_)
            | SignitizeError::Pdf(_)
            | SignitizeError::Io(_) => ErrorKind::InputDocument,
            SignitizeError::OutputDir { .. }
            | SignitizeError::OutputFile { .. }
            | SignitizeError::TaskJoin(_) => ErrorKind::Output,
        }
    }
}

pub type Result<T> = std::result::Result<T, SignitizeError>;

/// Where the imposed page pairs are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputMode {
    /// One file for the whole run, volumes included
    Combined,
    /// One file per volume
    #[default]
    PerVolume,
    /// One file per signature (folio)
    PerSignature,
}

/// Statistics about a signitize run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignitizeStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of volumes (books)
    pub volumes: usize,
    /// Number of signatures across all volumes
    pub signatures: usize,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
    /// Pages left out of the output (middle page of odd-length signatures)
    pub dropped_pages: usize,
    /// Output page count
    pub output_pages: usize,
    /// Physical sheets needed for duplex printing
    pub sheets: usize,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct SignitizeReport {
    /// Files written, in the order they were closed
    pub files: Vec<PathBuf>,
    pub statistics: SignitizeStatistics,
}
