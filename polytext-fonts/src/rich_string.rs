//! Immutable rich-string value type.
//!
//! A `RichString` is a text plus an ordered list of runs. Every run covers a
//! byte range `[start, end)` of the text and carries one property set. Runs
//! are contiguous, non-overlapping, cover the whole text and are ordered by
//! start offset. An empty text has exactly one empty run, so it still knows
//! its writing system and style.
//!
//! Values are never mutated in place: edits go through `RichStringBuilder`,
//! which produces a new value. Controls share values as `Arc<RichString>` so
//! an operation that changes nothing can hand back the same pointer.

use std::ops::Range;

use thiserror::Error;

/// Text properties shared by every character of a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunProps {
    /// Writing-system id
    pub writing_system: String,
    /// Named style
    pub style: String,
    /// Size override in millipoints, replacing the style's size
    pub explicit_size_mp: Option<u32>,
}

impl RunProps {
    pub fn new(writing_system: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            writing_system: writing_system.into(),
            style: style.into(),
            explicit_size_mp: None,
        }
    }

    pub fn with_explicit_size(mut self, size_mp: u32) -> Self {
        self.explicit_size_mp = Some(size_mp);
        self
    }
}

/// One run of a rich string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Run {
    start: usize,
    end: usize,
    props: RunProps,
}

impl Run {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn props(&self) -> &RunProps {
        &self.props
    }

    pub fn writing_system(&self) -> &str {
        &self.props.writing_system
    }

    pub fn style(&self) -> &str {
        &self.props.style
    }

    pub fn explicit_size_mp(&self) -> Option<u32> {
        self.props.explicit_size_mp
    }
}

/// Reasons a text/run list pair is not a valid rich string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("a rich string needs at least one run")]
    NoRuns,
    #[error("run {index} starts at {start}, expected {expected}")]
    Gap {
        index: usize,
        start: usize,
        expected: usize,
    },
    #[error("run {index} is empty")]
    EmptyRun { index: usize },
    #[error("runs end at {end} but the text is {len} bytes long")]
    Coverage { end: usize, len: usize },
    #[error("run boundary {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Styled text: a string plus its runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RichString {
    text: String,
    runs: Vec<Run>,
}

impl RichString {
    /// A string with a single run carrying `writing_system` and `style`.
    pub fn plain(
        text: impl Into<String>,
        writing_system: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            runs: vec![Run {
                start: 0,
                end,
                props: RunProps::new(writing_system, style),
            }],
        }
    }

    /// Build from a text and `(end offset, props)` pairs, validating the run invariant.
    pub fn from_parts(
        text: impl Into<String>,
        runs: impl IntoIterator<Item = (usize, RunProps)>,
    ) -> Result<Self, RunError> {
        let text = text.into();
        let mut built = Vec::new();
        let mut start = 0;
        for (index, (end, props)) in runs.into_iter().enumerate() {
            if end < start {
                return Err(RunError::Gap {
                    index,
                    start: end,
                    expected: start,
                });
            }
            if end == start && !text.is_empty() {
                return Err(RunError::EmptyRun { index });
            }
            if end > text.len() {
                return Err(RunError::Coverage {
                    end,
                    len: text.len(),
                });
            }
            if !text.is_char_boundary(end) {
                return Err(RunError::NotCharBoundary { offset: end });
            }
            built.push(Run { start, end, props });
            start = end;
        }
        if built.is_empty() {
            return Err(RunError::NoRuns);
        }
        if text.is_empty() && built.len() > 1 {
            return Err(RunError::EmptyRun { index: 1 });
        }
        if start != text.len() {
            return Err(RunError::Coverage {
                end: start,
                len: text.len(),
            });
        }
        Ok(Self { text, runs: built })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Text covered by run `index`.
    pub fn run_text(&self, index: usize) -> Option<&str> {
        self.runs.get(index).map(|run| &self.text[run.range()])
    }

    /// Whether any run overrides its style's size.
    pub fn has_explicit_sizes(&self) -> bool {
        self.runs.iter().any(|run| run.props.explicit_size_mp.is_some())
    }

    /// Start a builder holding a copy of this string.
    pub fn to_builder(&self) -> RichStringBuilder {
        RichStringBuilder {
            text: self.text.clone(),
            runs: self.runs.clone(),
        }
    }
}

/// Produces new `RichString` values.
///
/// Either append segments with [`push`](Self::push), or start from an
/// existing string with [`RichString::to_builder`] and change run properties.
#[derive(Debug, Clone, Default)]
pub struct RichStringBuilder {
    text: String,
    runs: Vec<Run>,
}

impl RichStringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `segment` as a new run. Empty segments are skipped once the
    /// builder holds text.
    pub fn push(&mut self, segment: &str, props: RunProps) -> &mut Self {
        if segment.is_empty() {
            if self.runs.is_empty() {
                self.runs.push(Run {
                    start: 0,
                    end: 0,
                    props,
                });
            }
            return self;
        }
        // Replace the placeholder run of an empty text.
        if self.text.is_empty() {
            self.runs.clear();
        }
        let start = self.text.len();
        self.text.push_str(segment);
        self.runs.push(Run {
            start,
            end: self.text.len(),
            props,
        });
        self
    }

    /// Replace the properties of run `index`. Returns false if out of range.
    pub fn set_run_props(&mut self, index: usize, props: RunProps) -> bool {
        match self.runs.get_mut(index) {
            Some(run) => {
                run.props = props;
                true
            }
            None => false,
        }
    }

    /// Set or clear the explicit size of run `index`. Returns false if out of range.
    pub fn set_explicit_size(&mut self, index: usize, size_mp: Option<u32>) -> bool {
        match self.runs.get_mut(index) {
            Some(run) => {
                run.props.explicit_size_mp = size_mp;
                true
            }
            None => false,
        }
    }

    /// Apply `f` to every run's properties.
    pub fn map_props(&mut self, mut f: impl FnMut(&mut RunProps)) -> &mut Self {
        for run in &mut self.runs {
            f(&mut run.props);
        }
        self
    }

    pub fn build(self) -> RichString {
        let mut runs = self.runs;
        if runs.is_empty() {
            runs.push(Run {
                start: 0,
                end: 0,
                props: RunProps::new("", ""),
            });
        }
        RichString {
            text: self.text,
            runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_single_run() {
        let s = RichString::plain("λόγος", "grc", "Normal");
        assert_eq!(s.run_count(), 1);
        assert_eq!(s.runs()[0].range(), 0..s.text().len());
        assert_eq!(s.run_text(0), Some("λόγος"));
    }

    #[test]
    fn test_builder_push_contiguous() {
        let mut b = RichStringBuilder::new();
        b.push("the ", RunProps::new("en", "Normal"))
            .push("", RunProps::new("en", "Emphasis"))
            .push("λόγος", RunProps::new("grc", "Normal"));
        let s = b.build();
        assert_eq!(s.text(), "the λόγος");
        assert_eq!(s.run_count(), 2);
        assert_eq!(s.runs()[1].range(), 4..s.text().len());
        assert_eq!(s.runs()[1].writing_system(), "grc");
    }

    #[test]
    fn test_empty_text_keeps_props() {
        let mut b = RichStringBuilder::new();
        b.push("", RunProps::new("fr", "Normal"));
        let s = b.build();
        assert_eq!(s.run_count(), 1);
        assert_eq!(s.runs()[0].writing_system(), "fr");
    }

    #[test]
    fn test_from_parts_valid() {
        let s = RichString::from_parts(
            "abcdef",
            [(2, RunProps::new("en", "A")), (6, RunProps::new("fr", "B"))],
        )
        .unwrap();
        assert_eq!(s.run_text(1), Some("cdef"));
    }

    #[test]
    fn test_from_parts_rejects_short_coverage() {
        let err = RichString::from_parts("abcdef", [(4, RunProps::new("en", "A"))]).unwrap_err();
        assert_eq!(err, RunError::Coverage { end: 4, len: 6 });
    }

    #[test]
    fn test_from_parts_rejects_overlap() {
        let err = RichString::from_parts(
            "abcdef",
            [(4, RunProps::new("en", "A")), (3, RunProps::new("en", "B"))],
        )
        .unwrap_err();
        assert!(matches!(err, RunError::Gap { index: 1, .. }));
    }

    #[test]
    fn test_from_parts_rejects_char_boundary() {
        let err = RichString::from_parts(
            "λx",
            [(1, RunProps::new("grc", "A")), (3, RunProps::new("en", "B"))],
        )
        .unwrap_err();
        assert_eq!(err, RunError::NotCharBoundary { offset: 1 });
    }

    #[test]
    fn test_set_run_props() {
        let s = RichString::from_parts(
            "abcdef",
            [(2, RunProps::new("en", "A")), (6, RunProps::new("fr", "B"))],
        )
        .unwrap();
        let mut b = s.to_builder();
        assert!(b.set_run_props(1, RunProps::new("grc", "B").with_explicit_size(8_000)));
        assert!(!b.set_run_props(2, RunProps::new("en", "A")));
        let changed = b.build();
        assert_eq!(changed.runs()[1].writing_system(), "grc");
        assert_eq!(changed.runs()[1].explicit_size_mp(), Some(8_000));
        assert_eq!(changed.run_text(1), Some("cdef"));
    }

    #[test]
    fn test_to_builder_does_not_touch_original() {
        let s = RichString::plain("abc", "en", "Normal");
        let mut b = s.to_builder();
        b.set_explicit_size(0, Some(9_000));
        let changed = b.build();
        assert_eq!(s.runs()[0].explicit_size_mp(), None);
        assert_eq!(changed.runs()[0].explicit_size_mp(), Some(9_000));
        assert!(changed.has_explicit_sizes());
    }
}
