pub mod config;
pub mod data;
pub mod directory;
pub mod error;
pub mod language;
pub mod quick_action;
pub mod responder;
pub mod session;
pub mod trust;
pub mod wizard;

// Re-export common error type
pub use error::NandiError;
pub use language::Language;
