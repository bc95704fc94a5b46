use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, FormatError>;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Serialization Error: {0}")]
    Serialization(#[from] Box<bincode::ErrorKind>),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported asset version {found}, this build reads version {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Material range {index_start}+{index_count} reaches past the {index_len} indices of the mesh")]
    InvalidRange {
        index_start: u32,
        index_count: u32,
        index_len: usize,
    },
}
