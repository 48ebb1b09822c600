// WHY: the whole transform lives here as a pure function over strings
// File handling and reporting are layered on top by job.rs and main.rs

use anyhow::Result;
use std::sync::OnceLock;
use tracing::debug;

pub mod markers;
pub mod whitespace;

pub use markers::{MarkerSegmenter, MARKER_PATTERN};
pub use whitespace::{collapse_whitespace, collapse_whitespace_into, is_collapsible};

use crate::stats::NormalizeStats;

/// Normalized text together with the metrics of the transform that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub stats: NormalizeStats,
}

/// Three-stage normalizer: line-break removal, whitespace collapse, marker re-segmentation
#[derive(Debug, Clone)]
pub struct Normalizer {
    segmenter: MarkerSegmenter,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            segmenter: MarkerSegmenter::new()?,
        })
    }

    /// Normalize `text` into a new string
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_with_stats(text).text
    }

    /// Normalize `text` and collect the length metrics used for reporting
    pub fn normalize_with_stats(&self, text: &str) -> Normalized {
        let mut collapsed = String::with_capacity(text.len());
        let line_breaks = collapse_whitespace_into(text, &mut collapsed);

        let mut segmented = String::with_capacity(collapsed.len() + 8);
        let markers_segmented = self.segmenter.segment_into(&collapsed, &mut segmented);

        let stats = NormalizeStats {
            // \r\n is one character, as a text-mode read sees it
            original_chars: text.chars().count() - text.matches("\r\n").count(),
            normalized_chars: segmented.chars().count(),
            line_breaks,
            markers_segmented,
        };

        debug!(
            "Normalized {} chars into {} chars ({} line breaks removed, {} markers segmented)",
            stats.original_chars, stats.normalized_chars, line_breaks, markers_segmented
        );

        Normalized {
            text: segmented,
            stats,
        }
    }

    pub fn segmenter(&self) -> &MarkerSegmenter {
        &self.segmenter
    }
}

/// Process-wide normalizer shared by [`normalize`]
pub fn shared_normalizer() -> &'static Normalizer {
    static SHARED: OnceLock<Normalizer> = OnceLock::new();
    // The marker pattern is a compile-time constant; building it cannot fail at runtime
    SHARED.get_or_init(|| Normalizer::new().expect("marker pattern compiles"))
}

/// Normalize `text` with the shared normalizer
///
/// Line breaks (`\r\n`, `\n`, `\r`) become spaces, whitespace runs collapse to one
/// space, the ends are trimmed, and every `[digits]` marker not at the very start
/// moves onto a new line.
///
/// ```
/// assert_eq!(
///     linemend::normalize("Hello\nworld [1] this is [2] a test"),
///     "Hello world\n[1] this is\n[2] a test"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    shared_normalizer().normalize(text)
}
