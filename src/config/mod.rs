//! Configuration for gestor
//!
//! Path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::GestorPaths;
pub use settings::Settings;
