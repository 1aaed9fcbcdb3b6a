use memchr::{memchr, memrchr};
use regex_staged::{
    dfa, LazyStartResult, MatchResult, PreCalculatedResult, TraceFinderResult,
};

// A stand-in for the compiled forward scanner: finds where the next
// space-delimited word ends, starting the search at `from`.
fn word_end(haystack: &[u8], from: usize) -> Option<usize> {
    let mut at = from;
    while at < haystack.len() && haystack[at] == b' ' {
        at += 1;
    }
    if at == haystack.len() {
        return None;
    }
    Some(match memchr(b' ', &haystack[at..]) {
        Some(i) => at + i,
        None => haystack.len(),
    })
}

// A stand-in for the compiled backward pass: reports the offset of the
// symbol just before the word containing `last`, which is the delimiter
// offset, or the offset below the window when the word starts at `from`.
fn word_start_finder(haystack: &[u8], last: i32, from: i32) -> i32 {
    let window = &haystack[from as usize..=last as usize];
    match memrchr(b' ', window) {
        Some(i) => from + i as i32,
        None => from - 1,
    }
}

#[test]
fn staged_word_search_defers_the_start() {
    let haystack = b"the quick brown fox";

    // Forward stage: the word after offset 3 ends at offset 9 ("quick").
    let end = word_end(haystack, 3).unwrap();
    assert_eq!(9, end);

    let result = MatchResult::LazyStart(LazyStartResult::new(
        haystack,
        3,
        end as i32,
        &word_start_finder,
    ));

    // Consumers that only need the end never trigger the backward stage.
    assert_eq!(9, result.get_end(0));
    assert_eq!(-1, result.get_start(0));

    // The first consumer that needs the start pays for it once.
    result.force_evaluation();
    assert_eq!(4, result.get_start(0));
    assert_eq!(-1, result.get_start(1));
    assert_eq!("[4, 9]", result.to_string());
}

#[test]
fn staged_word_search_at_the_window_edge() {
    let haystack = b"the quick brown fox";

    // The first word starts exactly at the search lower bound, so the
    // backward pass reports the offset below the window.
    let end = word_end(haystack, 0).unwrap();
    let result =
        LazyStartResult::new(haystack, 0, end as i32, &word_start_finder);
    result.force_evaluation();
    assert_eq!(0, result.get_start(0));
    assert_eq!(3, result.get_end(0));
}

// The trace-finder stage for a pattern shaped like "a(b)?c": the capture
// group layout of any match is one of exactly two shapes, distinguished by
// the byte before the final "c".
#[test]
fn staged_trace_finder_classifies_the_shape() {
    // Shape 0: "ac", group 1 absent.
    let mut short = PreCalculatedResult::new(2);
    short.set_start(0, 2);
    short.set_end(0, 0);
    // Shape 1: "abc", group 1 wraps the "b".
    let mut long = PreCalculatedResult::new(2);
    long.set_start(0, 3);
    long.set_end(0, 0);
    long.set_start(1, 2);
    long.set_end(1, 1);
    let shapes = vec![short, long];

    let classify = |haystack: &[u8], last: i32, _from: i32| {
        if haystack[last as usize - 1] == b'b' {
            1
        } else {
            0
        }
    };

    let haystack = b"xxabc";
    let result =
        TraceFinderResult::new(haystack, 0, 5, &classify, &shapes);
    assert_eq!(-1, result.get_start(1));

    result.force_evaluation();
    assert_eq!(2, result.get_start(0));
    assert_eq!(5, result.get_end(0));
    assert_eq!(3, result.get_start(1));
    assert_eq!(4, result.get_end(1));
    assert_eq!("[2, 5, 3, 4]", result.to_string());

    let haystack = b"xxxac";
    let result =
        TraceFinderResult::new(haystack, 0, 5, &classify, &shapes);
    result.force_evaluation();
    assert_eq!(3, result.get_start(0));
    assert_eq!(5, result.get_end(0));
    assert_eq!(-1, result.get_start(1));
    assert_eq!(-1, result.get_end(1));
}

// One compiled pattern carries one config per automaton stage.
#[test]
fn stage_configs_describe_their_automata() {
    let forward = dfa::Config::new()
        .searching(true)
        .number_of_capture_groups(2);
    let find_start = dfa::Config::new()
        .forward(false)
        .number_of_capture_groups(2)
        .min_result_length(2);

    assert!(forward.get_forward());
    assert!(!forward.is_backward());
    assert!(forward.get_searching());
    assert!(!forward.get_track_capture_groups());

    assert!(find_start.is_backward());
    assert!(!find_start.get_searching());
    assert_eq!(2, find_start.get_min_result_length());
    assert_eq!(
        forward.get_number_of_capture_groups(),
        find_start.get_number_of_capture_groups()
    );
}
