//! Pager content: the immutable line buffer and where its bytes come from.

mod buffer;
mod source;

pub use buffer::{ContentBuffer, Size};
pub use source::ContentSource;
