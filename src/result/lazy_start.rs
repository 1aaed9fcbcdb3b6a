use core::fmt;

use once_cell::sync::OnceCell;

use crate::result::DeferredSearch;

/// A match result that defers computing its start offset.
///
/// Many consumers of a regex engine, boolean match tests, length queries,
/// scanning loops, never look at where a match started. Computing the start
/// costs a full second automaton pass, so the forward scan records only the
/// end offset and binds a backward pass to run later, if ever.
///
/// The deferred pass is invoked with the offset of the last matched symbol
/// (`end - 1`) and, by its own convention, returns the offset of the symbol
/// immediately *preceding* the true start.
/// [`LazyStartResult::apply_find_start_result`] adds one to convert that to
/// an inclusive start offset. This is a fixed contract between the two
/// passes.
///
/// The start cell transitions from unset to set at most once. Once resolved
/// it is never recomputed, and repeated calls to
/// [`LazyStartResult::force_evaluation`] do not re-invoke the backward
/// pass, even when raced from multiple threads.
///
/// Only group 0 is tracked; every other group reports `-1`.
///
/// # Example
///
/// ```
/// use regex_staged::LazyStartResult;
///
/// // A backward pass that always reports the symbol before offset 4.
/// let find_start = |_: &[u8], _: i32, _: i32| 3;
/// let result = LazyStartResult::new(b"xxxxabcdef", 0, 10, &find_start);
///
/// assert!(!result.is_start_calculated());
/// result.force_evaluation();
/// assert!(result.is_start_calculated());
/// assert_eq!(4, result.get_start(0));
/// assert_eq!(10, result.get_end(0));
/// ```
pub struct LazyStartResult<'h, 'p> {
    haystack: &'h [u8],
    from_index: i32,
    end: i32,
    start: OnceCell<i32>,
    find_start: &'p dyn DeferredSearch,
}

impl<'h, 'p> LazyStartResult<'h, 'p> {
    /// Create a lazy result for a match that ends at `end`, where the
    /// original search was permitted to start at `from_index` or later.
    ///
    /// The `find_start` pass is bound now but not invoked until the first
    /// forced evaluation.
    ///
    /// # Panics
    ///
    /// This panics if `from_index` is negative or greater than `end`.
    pub fn new(
        haystack: &'h [u8],
        from_index: i32,
        end: i32,
        find_start: &'p dyn DeferredSearch,
    ) -> LazyStartResult<'h, 'p> {
        assert!(
            0 <= from_index && from_index <= end,
            "search window [{}, {}] is not a valid span",
            from_index,
            end
        );
        LazyStartResult {
            haystack,
            from_index,
            end,
            start: OnceCell::new(),
            find_start,
        }
    }

    /// Return the start offset of the given group.
    ///
    /// For group 0 this is the overall match start, or `-1` if it has not
    /// been resolved yet. Every other group reports `-1`.
    #[inline]
    pub fn get_start(&self, group: usize) -> i32 {
        if group == 0 {
            self.start()
        } else {
            -1
        }
    }

    /// Return the end offset of the given group.
    ///
    /// For group 0 this is the overall match end, known since construction.
    /// Every other group reports `-1`.
    #[inline]
    pub fn get_end(&self, group: usize) -> i32 {
        if group == 0 {
            self.end
        } else {
            -1
        }
    }

    /// Return the overall match start, or `-1` if it has not been resolved.
    #[inline]
    pub fn start(&self) -> i32 {
        self.start.get().copied().unwrap_or(-1)
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

    /// Whether the start offset has been resolved.
    #[inline]
    pub fn is_start_calculated(&self) -> bool {
        self.start.get().is_some()
    }

    /// Return the arguments for the bound backward pass: the haystack, the
    /// offset of the last matched symbol (inclusive) and the search lower
    /// bound.
    #[inline]
    pub fn find_start_args(&self) -> (&'h [u8], i32, i32) {
        (self.haystack, self.end - 1, self.from_index)
    }

    /// Record the raw answer of the backward pass.
    ///
    /// The pass reports the offset of the symbol just before the true match
    /// start, so the inclusive start is one past it. If the start was
    /// already resolved, the first value is kept.
    pub fn apply_find_start_result(&self, result: i32) {
        let _ = self.start.set(result + 1);
    }

    /// Resolve the start offset now if it has not been resolved yet.
    ///
    /// The bound backward pass runs at most once per result, no matter how
    /// often this is called or from how many threads.
    pub fn force_evaluation(&self) {
        self.start.get_or_init(|| {
            trace!(
                "resolving deferred match start, end={} from_index={}",
                self.end,
                self.from_index
            );
            let (haystack, last_index, from_index) = self.find_start_args();
            self.find_start.run(haystack, last_index, from_index) + 1
        });
    }
}

impl<'h, 'p> fmt::Display for LazyStartResult<'h, 'p> {
    /// Render as `[start, end]`, forcing evaluation first. Debug-only path.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_start_calculated() {
            self.force_evaluation();
        }
        write!(f, "[{}, {}]", self.start(), self.end)
    }
}

impl<'h, 'p> fmt::Debug for LazyStartResult<'h, 'p> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LazyStartResult")
            .field("from_index", &self.from_index)
            .field("end", &self.end)
            .field("start", &self.start.get())
            .finish()
    }
}
