use core::convert::TryFrom;
use core::fmt;

use once_cell::sync::OnceCell;

use crate::result::{DeferredSearch, PreCalculatedResult};

/// A match result that defers all of its capture group offsets.
///
/// Some patterns admit only a small, statically enumerable set of capture
/// group layouts. For those, a per-symbol capture tracker is overkill: the
/// compiler emits one [`PreCalculatedResult`] per possible shape, and a
/// backward "trace finder" automaton, run from the end of the match, merely
/// classifies which shape occurred. The selected shape then materializes
/// every group boundary against the known end offset in a single step.
///
/// The candidate shapes are owned by the compiled pattern and shared by
/// every result derived from it; they all agree on the number of capture
/// groups, which fixes the offset buffer at `2 * group count` entries. The
/// buffer is written exactly once, on the first forced evaluation or the
/// first applied classification, and is never recomputed.
///
/// Before resolution, every group reports `-1`. Reading group data without
/// first forcing evaluation is a protocol violation on the caller's part;
/// this type does not guard against it beyond that placeholder.
pub struct TraceFinderResult<'h, 'p> {
    haystack: &'h [u8],
    from_index: i32,
    end: i32,
    indices: OnceCell<Box<[i32]>>,
    trace_finder: &'p dyn DeferredSearch,
    pre_calculated: &'p [PreCalculatedResult],
}

impl<'h, 'p> TraceFinderResult<'h, 'p> {
    /// Create a result whose group offsets will be classified into one of
    /// the given pre-calculated shapes.
    ///
    /// # Panics
    ///
    /// This panics if `from_index` is negative or greater than `end`, if
    /// `pre_calculated` is empty, or if the candidates disagree on their
    /// number of capture groups.
    pub fn new(
        haystack: &'h [u8],
        from_index: i32,
        end: i32,
        trace_finder: &'p dyn DeferredSearch,
        pre_calculated: &'p [PreCalculatedResult],
    ) -> TraceFinderResult<'h, 'p> {
        assert!(
            0 <= from_index && from_index <= end,
            "search window [{}, {}] is not a valid span",
            from_index,
            end
        );
        assert!(
            !pre_calculated.is_empty(),
            "a trace finder result needs at least one candidate shape"
        );
        let number_of_groups = pre_calculated[0].number_of_groups();
        assert!(
            pre_calculated
                .iter()
                .all(|r| r.number_of_groups() == number_of_groups),
            "all candidate shapes must agree on the number of capture groups"
        );
        TraceFinderResult {
            haystack,
            from_index,
            end,
            indices: OnceCell::new(),
            trace_finder,
            pre_calculated,
        }
    }

    /// Return the start offset of the given group, or `-1` before
    /// resolution.
    #[inline]
    pub fn get_start(&self, group: usize) -> i32 {
        self.index(group * 2)
    }

    /// Return the end offset of the given group, or `-1` before resolution.
    #[inline]
    pub fn get_end(&self, group: usize) -> i32 {
        self.index(group * 2 + 1)
    }

    #[inline]
    fn index(&self, i: usize) -> i32 {
        match self.indices.get() {
            None => -1,
            Some(indices) => indices[i],
        }
    }

    /// Return the number of capture groups, shared by all candidate shapes.
    #[inline]
    pub fn number_of_groups(&self) -> usize {
        self.pre_calculated[0].number_of_groups()
    }

    /// Return the resolved offset buffer, or `None` before resolution.
    ///
    /// The buffer holds `2 * number_of_groups` entries, the start and end
    /// offset of each group in order.
    #[inline]
    pub fn indices(&self) -> Option<&[i32]> {
        self.indices.get().map(|indices| &**indices)
    }

    /// Return the overall match end.
    #[inline]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Return the lower bound the original search was permitted to start
    /// from.
    #[inline]
    pub fn from_index(&self) -> i32 {
        self.from_index
    }

    /// Return the haystack this result points into.
    #[inline]
    pub fn haystack(&self) -> &'h [u8] {
        self.haystack
    }

    /// Whether the group offsets have been resolved.
    #[inline]
    pub fn is_result_calculated(&self) -> bool {
        self.indices.get().is_some()
    }

    /// Return the arguments for the bound trace finder pass: the haystack,
    /// the offset of the last matched symbol (inclusive) and the search
    /// lower bound.
    #[inline]
    pub fn trace_finder_args(&self) -> (&'h [u8], i32, i32) {
        (self.haystack, self.end - 1, self.from_index)
    }

    /// Record the classification made by the trace finder pass and
    /// materialize the selected shape against the match end.
    ///
    /// If the result was already resolved, the original resolution is kept.
    ///
    /// # Panics
    ///
    /// This panics if `pre_calc_index` is out of range. The compiler that
    /// builds the candidate set is exhaustive, so an out-of-range
    /// classification is an internal error with no runtime recovery.
    pub fn apply_trace_finder_result(&self, pre_calc_index: usize) {
        debug!(
            "applying pre-calculated result {} at end={}",
            pre_calc_index, self.end
        );
        let shape = &self.pre_calculated[pre_calc_index];
        self.indices.get_or_init(|| shape.materialize(self.end));
    }

    /// Resolve the group offsets now if they have not been resolved yet.
    ///
    /// The bound trace finder pass runs at most once per result, no matter
    /// how often this is called or from how many threads.
    pub fn force_evaluation(&self) {
        self.indices.get_or_init(|| {
            trace!(
                "classifying deferred capture groups, end={} from_index={}",
                self.end,
                self.from_index
            );
            let (haystack, last_index, from_index) = self.trace_finder_args();
            let selected =
                self.trace_finder.run(haystack, last_index, from_index);
            let selected = usize::try_from(selected)
                .expect("trace finder must classify into the candidate set");
            self.pre_calculated[selected].materialize(self.end)
        });
    }
}

impl<'h, 'p> fmt::Display for TraceFinderResult<'h, 'p> {
    /// Render the flat offset list, forcing evaluation first. Debug-only
    /// path.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_result_calculated() {
            self.force_evaluation();
        }
        let indices = self
            .indices
            .get()
            .expect("forcing evaluation must resolve the offsets");
        write!(f, "{:?}", indices)
    }
}

impl<'h, 'p> fmt::Debug for TraceFinderResult<'h, 'p> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TraceFinderResult")
            .field("from_index", &self.from_index)
            .field("end", &self.end)
            .field("indices", &self.indices.get())
            .field("candidates", &self.pre_calculated.len())
            .finish()
    }
}
