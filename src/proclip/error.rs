use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipError {
    /// The leading bytes are not the clip magic, so this is not a clip at all.
    #[error("The provided file is not a valid clip file.")]
    UnsupportedFile,

    /// A recognised clip file whose body is truncated or carries a bad length field.
    #[error("Malformed clip file: {0}")]
    Format(String),

    #[error("datum of size {size} not supported in this context")]
    SizeLimitExceeded { size: usize },

    #[error("Malformed variable string: '{0}' is not a key=value pair")]
    MalformedVariableString(String),

    #[error("No value bound for variable '{0}'")]
    MissingVariableBinding(String),

    #[error("Some variables do not have values.")]
    IncompleteVariableBindings,

    #[error("A file with that name already exists: {}", .0.display())]
    FileExists(PathBuf),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ClipError>;
