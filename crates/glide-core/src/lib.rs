pub mod config;
pub mod content;
pub mod error;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use content::{ContentBuffer, ContentSource, Size};
pub use error::{Error, Result};
