//! Source location tracking.
//!
//! A [`Span`] ties a token back to the text it was cut from: a half-open
//! byte range plus the line and column where the range begins.

mod source_map;

pub use source_map::SourceFile;

/// A half-open byte range `[start, end)` in a source text.
///
/// `line` and `column` are 1-based and describe `start`. Columns count
/// characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line of `start` (1-based)
    pub line: u32,
    /// Column of `start` (1-based)
    pub column: u32,
}

impl Span {
    /// Create a span over `[start, end)` beginning at `line:column`.
    ///
    /// ```
    /// use povc_util::span::Span;
    ///
    /// let span = Span::new(0, 3, 1, 1);
    /// assert_eq!(span.range(), 0..3);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The span as a `Range`, ready for slicing the source.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
