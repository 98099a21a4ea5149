use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("No compiled class found under {}", .dir.display())]
    NoCompiledClass { dir: PathBuf },

    #[error("Only one class is allowed, you have multiple: {}", .names.join(", "))]
    MultipleCompiledClasses { names: Vec<String> },

    #[error("Robots should be placed in the following package: com.netcompany.robocode (found in {})", .dir.display())]
    WrongPackage { dir: PathBuf },

    #[error("Class file name is not valid UTF-8: {}", .path.display())]
    InvalidClassName { path: PathBuf },

    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Directory scan error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Timestamp error: {0}")]
    Time(#[from] time::error::Format),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }

    /// Errors the user fixes by changing the project layout.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::NoCompiledClass { .. }
                | Error::MultipleCompiledClasses { .. }
                | Error::WrongPackage { .. }
                | Error::InvalidClassName { .. }
        )
    }
}
