/*!
Match results for staged regex searches.

A staged search runs a forward automaton that only determines where a match
*ends*. Everything else a caller might want, the overall start offset or the
full set of capture group boundaries, costs at least one more automaton pass.
The types in this module record what the forward scan learned and defer the
rest until a consumer actually asks, at which point a bound backward pass (a
[`DeferredSearch`]) is invoked exactly once and its answer is memoized.

All offsets in this module are `i32`, with `-1` serving as the "unset or not
tracked" sentinel. The backward pass convention of reporting the offset just
*before* the true match start relies on that signed representation: a match
starting at offset 0 is reported as `-1`. Group indices are `usize`. A result
that does not track a group reports `-1` for it, which means "not tracked in
this mode", not "the group did not participate in the match".
*/

use core::fmt;

pub use crate::result::{
    lazy_start::LazyStartResult, precalculated::PreCalculatedResult,
    trace_finder::TraceFinderResult,
};

mod lazy_start;
mod precalculated;
mod trace_finder;

/// A deferred search pass, typically backed by a separately compiled
/// backward automaton.
///
/// Lazy results hold one of these from construction and invoke it at most
/// once, on the first forced evaluation. The arguments are always the same:
/// the haystack, the offset of the last matched symbol (`end - 1`, which is
/// `-1` for an empty match at offset 0) and the lower bound the original
/// search was permitted to start from.
///
/// The meaning of the returned value depends on the strategy that bound the
/// pass: a start-resolution pass returns the offset of the symbol
/// immediately preceding the true match start, while a trace-finder pass
/// returns an index into its fixed array of candidate shapes.
///
/// Any `Fn(&[u8], i32, i32) -> i32` implements this trait, so tests and
/// engines without a compilation step can bind plain closures.
pub trait DeferredSearch {
    /// Run the deferred pass and return its strategy-specific answer.
    fn run(&self, haystack: &[u8], last_index: i32, from_index: i32) -> i32;
}

impl<F: Fn(&[u8], i32, i32) -> i32> DeferredSearch for F {
    fn run(&self, haystack: &[u8], last_index: i32, from_index: i32) -> i32 {
        (self)(haystack, last_index, from_index)
    }
}

/// A match result whose offsets were all known when the forward scan
/// finished.
///
/// This is the trivial member of the result family: it tracks group 0 and
/// nothing else, and forcing evaluation is a no-op.
#[derive(Clone, Debug)]
pub struct EagerResult<'h> {
    haystack: &'h [u8],
    start: i32,
    end: i32,
}

impl<'h> EagerResult<'h> {
    /// Create a result with a fully known overall match span.
    ///
    /// # Panics
    ///
    /// This panics if `start > end` or if `start` is negative.
    pub fn new(haystack: &'h [u8], start: i32, end: i32) -> EagerResult<'h> {
        assert!(
            0 <= start && start <= end,
            "match span [{}, {}] is not a valid span",
            start,
            end
        );
        EagerResult { haystack, start, end }
    }

    /// Return the start offset of the given group, or `-1` for any group
    /// other than 0.
    #[inline]
    pub fn get_start(&self, group: usize) -> i32 {
        if group == 0 {
            self.start
        } else {
            -1
        }
    }

    /// Return the end offset of the given group, or `-1` for any group
    /// other than 0.
    #[inline]
    pub fn get_end(&self, group: usize) -> i32 {
        if group == 0 {
            self.end
        } else {
            -1
        }
    }

    /// Return the haystack this result points into.
    #[inline]
    pub fn haystack(&self) -> &'h [u8] {
        self.haystack
    }
}

impl<'h> fmt::Display for EagerResult<'h> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// The result of one successful match attempt.
///
/// The forward scan picks the cheapest variant the compiled pattern
/// supports: [`Eager`](MatchResult::Eager) when everything is already known,
/// [`LazyStart`](MatchResult::LazyStart) when only the overall start offset
/// needs a second pass, and [`TraceFinder`](MatchResult::TraceFinder) when
/// the full capture group layout is classified into one of finitely many
/// pre-calculated shapes. An unsuccessful attempt is simply the absence of a
/// result (`Option<MatchResult>` at the executor boundary), not a variant of
/// it.
///
/// Each variant carries only its own state. Callers must know which group
/// semantics their chosen variant provides: a `-1` from
/// [`MatchResult::get_start`] means the group is not tracked in this mode.
#[derive(Debug)]
pub enum MatchResult<'h, 'p> {
    /// All offsets were computed by the forward scan.
    Eager(EagerResult<'h>),
    /// The start offset is resolved by a deferred backward pass.
    LazyStart(LazyStartResult<'h, 'p>),
    /// All group boundaries are resolved by deferred shape classification.
    TraceFinder(TraceFinderResult<'h, 'p>),
}

impl<'h, 'p> MatchResult<'h, 'p> {
    /// Return the start offset of the given group, or `-1` if this variant
    /// does not track it or has not yet resolved it.
    #[inline]
    pub fn get_start(&self, group: usize) -> i32 {
        match *self {
            MatchResult::Eager(ref r) => r.get_start(group),
            MatchResult::LazyStart(ref r) => r.get_start(group),
            MatchResult::TraceFinder(ref r) => r.get_start(group),
        }
    }

    /// Return the end offset of the given group, or `-1` if this variant
    /// does not track it or has not yet resolved it.
    #[inline]
    pub fn get_end(&self, group: usize) -> i32 {
        match *self {
            MatchResult::Eager(ref r) => r.get_end(group),
            MatchResult::LazyStart(ref r) => r.get_end(group),
            MatchResult::TraceFinder(ref r) => r.get_end(group),
        }
    }

    /// Resolve any deferred offsets now.
    ///
    /// This is a no-op for eager results and for lazy results that were
    /// already forced.
    pub fn force_evaluation(&self) {
        match *self {
            MatchResult::Eager(_) => {}
            MatchResult::LazyStart(ref r) => r.force_evaluation(),
            MatchResult::TraceFinder(ref r) => r.force_evaluation(),
        }
    }
}

impl<'h, 'p> fmt::Display for MatchResult<'h, 'p> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MatchResult::Eager(ref r) => fmt::Display::fmt(r, f),
            MatchResult::LazyStart(ref r) => fmt::Display::fmt(r, f),
            MatchResult::TraceFinder(ref r) => fmt::Display::fmt(r, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eager_tracks_only_group_zero() {
        let result = EagerResult::new(b"abcdef", 2, 5);
        assert_eq!(2, result.get_start(0));
        assert_eq!(5, result.get_end(0));
        assert_eq!(-1, result.get_start(1));
        assert_eq!(-1, result.get_end(1));
        assert_eq!("[2, 5]", result.to_string());
    }

    #[test]
    #[should_panic]
    fn eager_rejects_inverted_span() {
        EagerResult::new(b"abcdef", 5, 2);
    }

    #[test]
    fn dispatch_through_the_result_family() {
        let find_start = |_: &[u8], _: i32, _: i32| 1;
        let lazy = MatchResult::LazyStart(LazyStartResult::new(
            b"abcdef",
            0,
            5,
            &find_start,
        ));
        let eager = MatchResult::Eager(EagerResult::new(b"abcdef", 2, 5));

        assert_eq!(2, eager.get_start(0));
        assert_eq!(-1, lazy.get_start(0));
        lazy.force_evaluation();
        eager.force_evaluation();
        assert_eq!(2, lazy.get_start(0));
        assert_eq!(5, lazy.get_end(0));
    }
}
