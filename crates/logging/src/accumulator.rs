//! crates/logging/src/accumulator.rs
//! Pending segments of the entry currently being built.

use crate::segment::{LogOptions, Segment};
use crate::severity::Severity;

/// Ordered segments appended since the last terminal call.
#[derive(Clone, Debug, Default)]
pub struct SegmentBuffer {
    segments: Vec<Segment>,
}

impl SegmentBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Returns the pending segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Reports whether no segment is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Discards every pending segment.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Completes the entry for a terminal call.
    ///
    /// `text` becomes a final text segment when non-empty. The buffer is
    /// always left empty. The segments are returned only when there was at
    /// least one and `severity` passes `minimum`; otherwise they are dropped.
    pub fn complete(
        &mut self,
        severity: Severity,
        minimum: Severity,
        text: &str,
        options: LogOptions,
    ) -> Option<Vec<Segment>> {
        if let Some(segment) = Segment::text(text, options.into()) {
            self.segments.push(segment);
        }

        let segments = std::mem::take(&mut self.segments);
        (!segments.is_empty() && severity.passes(minimum)).then_some(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::TextOptions;

    fn filled() -> SegmentBuffer {
        let mut buffer = SegmentBuffer::new();
        buffer.push(Segment::text("hello", TextOptions::default()).unwrap());
        buffer.push(Segment::LineBreak);
        buffer
    }

    #[test]
    fn complete_returns_segments_that_pass_the_threshold() {
        let mut buffer = filled();

        let segments = buffer.complete(Severity::Warning, Severity::Debug, "", LogOptions::default());
        assert_eq!(segments.map(|s| s.len()), Some(2));
        assert!(buffer.is_empty());
    }

    #[test]
    fn complete_drops_filtered_segments() {
        let mut buffer = filled();

        let segments = buffer.complete(Severity::Debug, Severity::Error, "tail", LogOptions::default());
        assert!(segments.is_none());
        assert!(buffer.is_empty());
    }

    #[test]
    fn complete_appends_the_final_text() {
        let mut buffer = SegmentBuffer::new();

        let segments = buffer
            .complete(
                Severity::Debug,
                Severity::Debug,
                "done",
                LogOptions::styled([("color", "red")]),
            )
            .expect("segments pass");

        assert_eq!(segments.len(), 1);
        assert!(segments[0].style().is_some());
    }

    #[test]
    fn complete_without_content_returns_nothing() {
        let mut buffer = SegmentBuffer::new();
        assert!(buffer
            .complete(Severity::Critical, Severity::Debug, "", LogOptions::default())
            .is_none());
    }
}
