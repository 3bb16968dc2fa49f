use thiserror::Error;

/// Errors raised while loading translations
#[derive(Error, Debug)]
pub enum LoadError {
    /// Neither the requested language nor English has a catalog
    #[error("No translations available for {0}")]
    NoTranslations(String),
    /// The overlay resource could not be read
    #[error("Failed to load language file {file}: {source}")]
    Fetch {
        /// Overlay file name
        file: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The overlay resource is not a valid catalog
    #[error("Error parsing language file {file}: {source}")]
    Parse {
        /// Overlay file name
        file: String,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors raised by a preference store
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// The preference file could not be read or written
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),
    /// The preference file is not valid JSON
    #[error("Failed to encode preference file: {0}")]
    Encode(#[from] serde_json::Error),
}
