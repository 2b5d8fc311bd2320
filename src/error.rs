/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application
#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    /// A required setting (such as `APP_URL`) is not configured
    ConfigurationMissing(String),
    /// An `@apiParam` declaration carries no recognizable type keyword
    MissingType {
        controller: String,
        action: String,
        param: String,
    },
    /// A non-file `@apiParam` declaration has no `$name` token
    MissingName { controller: String, action: String },
    SerializationError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "IO error: {}", e),
            Error::ConfigurationMissing(what) => {
                write!(f, "Configuration missing: {} is not set", what)
            }
            Error::MissingType {
                controller,
                action,
                param,
            } => write!(
                f,
                "Missing parameter type in {}@{}: parameter `{}` has no type keyword",
                controller, action, param
            ),
            Error::MissingName { controller, action } => write!(
                f,
                "Missing parameter name in {}@{}: expected a `$name` token",
                controller, action
            ),
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(format!("YAML parse error: {}", err))
    }
}
