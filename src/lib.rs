/*!
Lazy match results and executor configuration for staged regular expression
matching.

This crate provides the result-determination layer of a regex engine that
splits matching into stages: a cheap forward scan that only finds the *end*
of a match, followed by optional, separately compiled backward passes that
resolve the rest on demand. The expensive alternative, tracking every capture
group transition-by-transition, is reserved for patterns where nothing
cheaper applies.

Three result representations cover the common cases:

* [`EagerResult`]: every offset was known when the forward scan finished.
* [`LazyStartResult`]: only the end offset is known. The start offset is
resolved by running a backward automaton from the end of the match, but only
if a caller actually asks for it. Boolean match tests and scanning loops
never pay for it.
* [`TraceFinderResult`]: the pattern's capture-group layout reduces to a
small, statically known set of shapes. A backward "trace finder" automaton
merely classifies which shape occurred; the shape's [`PreCalculatedResult`]
then materializes every group boundary against the known end offset in one
step.

The backward passes themselves live outside this crate. They are bound to
results through the [`DeferredSearch`] capability trait, which any closure or
compiled automaton handle can implement. [`dfa::Config`] carries the
execution-mode parameters (direction, search mode, capture tracking and so
on) that the external executor uses to select its code path.

# Example

This example stands in for the forward scan and backward pass with ordinary
code. A real engine would bind compiled automata instead.

```
use regex_staged::{LazyStartResult, MatchResult};

// Pretend a forward scan over the haystack determined that a match ends at
// offset 10, with the search permitted to start anywhere from offset 0. The
// backward pass scans from the last matched byte toward the lower bound and
// reports the offset just before the point where it stops matching.
let haystack = b"aaaabbbbbb";
let find_start = |h: &[u8], mut at: i32, from: i32| {
    while at >= from && h[at as usize] == b'b' {
        at -= 1;
    }
    at
};
let result = MatchResult::LazyStart(LazyStartResult::new(
    haystack, 0, 10, &find_start,
));

// The end offset is free. The start offset is unknown until forced.
assert_eq!(10, result.get_end(0));
assert_eq!(-1, result.get_start(0));

result.force_evaluation();
assert_eq!(4, result.get_start(0));
```
*/

pub use crate::result::{
    DeferredSearch, EagerResult, LazyStartResult, MatchResult,
    PreCalculatedResult, TraceFinderResult,
};

#[macro_use]
mod macros;

pub mod dfa;
pub mod result;
