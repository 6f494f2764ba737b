//! Scroll viewport and smooth scrolling for the glide pager
//!
//! # Layout
//!
//! ## Atoms
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Elapsed-time progress and interpolation
//! - `config` - Configuration helpers (types re-exported from glide-core)
//! - `command` - Declarative command table (instant vs animated)
//!
//! ## Molecules
//! - `animation` - One in-flight animation driven by frame deltas
//! - `viewport` - The scroll state machine over a content buffer
//!
//! # Usage
//!
//! ```ignore
//! use glide_tui::scroll::{Command, Viewport};
//!
//! let mut viewport = Viewport::new(content, visible, ScrollConfig::default());
//!
//! // Animated commands only move the target
//! viewport.apply(Command::HalfPageDownAnimated);
//!
//! // Each frame, advance by the time since the previous frame
//! let offset = viewport.step(elapsed);
//! ```

pub mod command;
pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;
pub mod viewport;

pub use animation::ScrollAnimation;
pub use command::{Command, Effect, Motion};
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use viewport::{Dispatch, Offset, ScrollState, Viewport};
