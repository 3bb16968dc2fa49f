//! Language selection, loading and resolution
/// Error types
mod error;
/// Supported languages and detection
pub mod language;
/// Overlay loading
pub mod loader;
/// Persisted language preference
pub mod preference;
/// Two-tier lookup
pub mod resolver;
/// Current language state
pub mod session;

pub use error::{
    LoadError,
    PreferenceError,
};
pub use language::{
    LANGUAGES,
    Language,
};
pub use loader::{
    DirectorySource,
    Loader,
    OverlaySource,
};
pub use preference::{
    FilePreferences,
    MemoryPreferences,
    PreferenceStore,
};
pub use resolver::Translator;
pub use session::{
    LanguageSession,
    SwitchOutcome,
};
