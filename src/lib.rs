pub mod cli;
pub mod config;
pub mod error;
pub mod escape;
pub mod roman;
pub mod ui;
pub mod version;

pub use error::{CodecError, Result};
pub use roman::RomanNumeral;
pub use version::{Version, VersionBump};
