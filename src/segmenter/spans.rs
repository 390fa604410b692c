// Core windowing logic: cover a residue sequence with fixed-length
// overlapping windows sized for a bounded encoder input.

use std::error::Error;
use std::fmt;

use serde::Serialize;

/// Half-open index range `[start, end)` over a residue sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// A segmentation parameter that violated its precondition.
///
/// Carries the parameter name, the offending value and the constraint so the
/// caller can fix its configuration. There are no other failure modes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidParameter {
    pub name: &'static str,
    pub value: i64,
    pub constraint: &'static str,
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid parameter {}={} (must be {})",
            self.name, self.value, self.constraint
        )
    }
}

impl Error for InvalidParameter {}

/// Validated window geometry, shared across the sequences of one run.
#[derive(Copy, Clone, Debug)]
pub struct WindowConfig {
    window: usize,
    overlap: usize,
}

impl WindowConfig {
    /// Validate `window >= 1` and `0 <= overlap < window`.
    pub fn new(window: i64, overlap: i64) -> Result<Self, InvalidParameter> {
        if window < 1 {
            return Err(InvalidParameter { name: "window", value: window, constraint: ">= 1" });
        }
        if overlap < 0 {
            return Err(InvalidParameter { name: "overlap", value: overlap, constraint: ">= 0" });
        }
        if overlap >= window {
            return Err(InvalidParameter { name: "overlap", value: overlap, constraint: "< window" });
        }
        Ok(Self { window: window as usize, overlap: overlap as usize })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Start-to-start distance between consecutive regular windows.
    pub fn stride(&self) -> usize {
        self.window - self.overlap
    }

    /// Ordered spans covering `[0, seq_len)`.
    ///
    /// A sequence no longer than the window yields the single span
    /// `[0, seq_len)`. Otherwise windows of exactly `window` residues advance
    /// by the stride while a full window still fits after the next step; a
    /// final window pinned to `[seq_len - window, seq_len)` then covers the
    /// tail, so the end of the sequence is never truncated. The tail window
    /// may overlap its predecessor by more than `overlap`; it is skipped when
    /// the last regular window already ends at the sequence end.
    ///
    /// `segment(1200)` with window=1000, overlap=200 gives
    /// `[0, 1000)` and `[200, 1200)`.
    pub fn segment(&self, seq_len: i64) -> Result<Vec<Span>, InvalidParameter> {
        if seq_len < 1 {
            return Err(InvalidParameter { name: "seq_len", value: seq_len, constraint: ">= 1" });
        }
        Ok(self.spans(seq_len as usize))
    }

    fn spans(&self, n: usize) -> Vec<Span> {
        let l = self.window;
        if n <= l {
            return vec![Span { start: 0, end: n }];
        }

        let s = self.stride();
        let mut out = Vec::with_capacity(n / s + 2);
        let mut start = 0usize;
        loop {
            out.push(Span { start, end: start + l });
            if start + s + l > n {
                break;
            }
            start += s;
        }

        let tail = Span { start: n - l, end: n };
        if out.last() != Some(&tail) {
            out.push(tail);
        }
        out
    }
}

/// Validate and segment in one call.
pub fn segment(seq_len: i64, window: i64, overlap: i64) -> Result<Vec<Span>, InvalidParameter> {
    WindowConfig::new(window, overlap)?.segment(seq_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(n: i64, l: i64, o: i64) -> Vec<(usize, usize)> {
        segment(n, l, o)
            .unwrap()
            .into_iter()
            .map(|s| (s.start, s.end))
            .collect()
    }

    #[test]
    fn long_sequence_gets_tail_pinned_window() {
        assert_eq!(spans(1200, 1000, 200), vec![(0, 1000), (200, 1200)]);
    }

    #[test]
    fn sequence_equal_to_window_is_one_span() {
        assert_eq!(spans(1000, 1000, 200), vec![(0, 1000)]);
    }

    #[test]
    fn sequence_shorter_than_window_is_one_span() {
        assert_eq!(spans(800, 1000, 200), vec![(0, 800)]);
    }

    #[test]
    fn exact_tiling_skips_duplicate_tail() {
        assert_eq!(spans(2000, 1000, 0), vec![(0, 1000), (1000, 2000)]);
    }

    #[test]
    fn stride_landing_on_tail_start_is_not_duplicated() {
        assert_eq!(spans(2600, 1000, 200), vec![(0, 1000), (800, 1800), (1600, 2600)]);
    }

    #[test]
    fn single_residue_sequence() {
        assert_eq!(spans(1, 5, 0), vec![(0, 1)]);
    }

    #[test]
    fn non_overlapping_tiling_still_pins_the_tail() {
        // 2100 residues, window 1000, overlap 0: the tail window overlaps
        // the second tile by 900 rather than leaving a 100-residue stub
        assert_eq!(spans(2100, 1000, 0), vec![(0, 1000), (1000, 2000), (1100, 2100)]);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            segment(0, 10, 0).unwrap_err(),
            InvalidParameter { name: "seq_len", value: 0, constraint: ">= 1" }
        );
        assert_eq!(
            segment(10, 0, 0).unwrap_err(),
            InvalidParameter { name: "window", value: 0, constraint: ">= 1" }
        );
        assert_eq!(
            segment(10, 5, 5).unwrap_err(),
            InvalidParameter { name: "overlap", value: 5, constraint: "< window" }
        );
        assert_eq!(
            segment(10, 5, -1).unwrap_err(),
            InvalidParameter { name: "overlap", value: -1, constraint: ">= 0" }
        );
    }

    #[test]
    fn error_message_names_parameter_and_constraint() {
        let err = segment(10, 5, 5).unwrap_err();
        assert_eq!(err.to_string(), "invalid parameter overlap=5 (must be < window)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn params() -> impl Strategy<Value = (i64, i64, i64)> {
        (1i64..=4096, 1i64..=512).prop_flat_map(|(n, l)| (Just(n), Just(l), 0..l))
    }

    proptest! {
        #[test]
        fn covers_head_and_tail((n, l, o) in params()) {
            let spans = segment(n, l, o).unwrap();
            prop_assert_eq!(spans.first().unwrap().start, 0);
            prop_assert_eq!(spans.last().unwrap().end, n as usize);
        }

        #[test]
        fn every_span_has_length_min_of_n_and_l((n, l, o) in params()) {
            let want = n.min(l) as usize;
            for s in segment(n, l, o).unwrap() {
                prop_assert_eq!(s.len(), want);
            }
        }

        #[test]
        fn covers_every_position((n, l, o) in params()) {
            let spans = segment(n, l, o).unwrap();
            let mut covered = vec![false; n as usize];
            for s in &spans {
                for i in s.start..s.end {
                    covered[i] = true;
                }
            }
            prop_assert!(covered.into_iter().all(|c| c));
        }

        #[test]
        fn regular_transitions_advance_by_the_stride((n, l, o) in params()) {
            let spans = segment(n, l, o).unwrap();
            // every transition except the one into the tail span is a stride step
            for pair in spans.windows(2).rev().skip(1) {
                prop_assert_eq!(pair[1].start - pair[0].start, (l - o) as usize);
            }
            // the tail transition never leaves a gap
            if let [.., prev, tail] = spans.as_slice() {
                prop_assert!(tail.start <= prev.end);
            }
        }

        #[test]
        fn starts_strictly_increase((n, l, o) in params()) {
            let spans = segment(n, l, o).unwrap();
            for pair in spans.windows(2) {
                prop_assert!(pair[0].start < pair[1].start);
            }
        }

        #[test]
        fn deterministic((n, l, o) in params()) {
            prop_assert_eq!(segment(n, l, o).unwrap(), segment(n, l, o).unwrap());
        }
    }
}
