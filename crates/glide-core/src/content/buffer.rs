use crate::error::{Error, Result};

/// Width and height in terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Immutable pre-rendered content shown by the pager
///
/// Lines are opaque display units; the buffer never inspects them. The
/// declared width is fixed at construction and is not measured from the
/// lines, so callers decide how wide the virtual canvas is.
#[derive(Debug, Clone)]
pub struct ContentBuffer<L> {
    lines: Vec<L>,
    width: usize,
}

impl<L> ContentBuffer<L> {
    /// Create a buffer from pre-rendered lines
    ///
    /// An empty line sequence is valid and represents empty content.
    /// A zero width is rejected.
    pub fn new(lines: Vec<L>, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidWidth(width));
        }
        Ok(Self { lines, width })
    }

    /// All stored lines, in order
    #[inline]
    pub fn lines(&self) -> &[L] {
        &self.lines
    }

    /// Virtual size: declared width and number of lines
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.lines.len())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines covering `[y, y + height)`, truncated at the end of content
    pub fn slice(&self, y: usize, height: usize) -> &[L] {
        let start = y.min(self.lines.len());
        let end = y.saturating_add(height).min(self.lines.len());
        &self.lines[start..end]
    }
}
