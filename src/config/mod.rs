//! Configuration for trivia-browser: settings file, directories, and the palette.

/// Config line parsing helpers.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access and parsing.
mod settings;
/// Built-in color palette.
mod theme;

pub use paths::{config_dir, logs_dir};
pub use settings::{
    DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, Settings, load_settings_from,
    parse_settings, settings,
};
pub use theme::{Theme, theme};
