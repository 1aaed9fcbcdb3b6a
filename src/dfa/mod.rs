/*!
Execution-mode configuration for compiled DFAs.

A staged engine compiles one logical pattern into several automata: a
forward scanner that finds match ends, and backward variants that resolve
start offsets or classify capture group shapes on demand. Each compiled
automaton is paired with a [`Config`] describing how the external executor
should run it, in which direction it consumes input, whether it may try
multiple start offsets, and whether the expensive per-transition capture
tracking is enabled at all.
*/

/// The execution-mode parameters of one compiled automaton.
///
/// A config is an immutable value object with no identity beyond its field
/// values: it is built once, when the automaton is compiled, and handed to
/// the executor unchanged on every run. The setters follow the builder
/// style and consume the config by value.
///
/// The default configuration describes the common forward scanner: consume
/// input left to right at a fixed offset, no capture tracking, one capture
/// group and no minimum match length.
///
/// # Example
///
/// ```
/// use regex_staged::dfa::Config;
///
/// // The backward pass that resolves lazy start offsets.
/// let config = Config::new().forward(false).min_result_length(3);
/// assert!(config.is_backward());
/// assert!(!config.get_searching());
/// assert_eq!(3, config.get_min_result_length());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    forward: bool,
    searching: bool,
    track_capture_groups: bool,
    regression_test_mode: bool,
    number_of_capture_groups: usize,
    min_result_length: usize,
}

impl Config {
    /// Return a new default configuration.
    pub fn new() -> Config {
        Config {
            forward: true,
            searching: false,
            track_capture_groups: false,
            regression_test_mode: false,
            number_of_capture_groups: 1,
            min_result_length: 0,
        }
    }

    /// Set the direction in which the automaton consumes its input: left to
    /// right when enabled, right to left when disabled.
    ///
    /// The backward passes that resolve deferred start offsets and classify
    /// capture group shapes disable this.
    ///
    /// This is enabled by default.
    pub fn forward(mut self, yes: bool) -> Config {
        self.forward = yes;
        self
    }

    /// Set whether the search is unanchored.
    ///
    /// An unanchored automaton may try successive start offsets until one
    /// yields a match; an anchored one only ever matches at the offset it
    /// was started at.
    ///
    /// This is disabled by default.
    pub fn searching(mut self, yes: bool) -> Config {
        self.searching = yes;
        self
    }

    /// Set whether the automaton records every capture group boundary
    /// transition by transition.
    ///
    /// This is the expensive general mode. The lazy result representations
    /// exist precisely so that the hot path can leave it disabled.
    ///
    /// This is disabled by default.
    pub fn track_capture_groups(mut self, yes: bool) -> Config {
        self.track_capture_groups = yes;
        self
    }

    /// Set whether the executor should enable its extra correctness
    /// assertions.
    ///
    /// Diagnostics only. This never changes production control flow and is
    /// never enabled on production fast paths.
    ///
    /// This is disabled by default.
    pub fn regression_test_mode(mut self, yes: bool) -> Config {
        self.regression_test_mode = yes;
        self
    }

    /// Set the total number of capture groups, including group 0.
    ///
    /// This is `1` by default.
    ///
    /// # Panics
    ///
    /// This panics when `number` is zero; group 0 always exists.
    pub fn number_of_capture_groups(mut self, number: usize) -> Config {
        assert!(
            number >= 1,
            "group 0 always exists, so there must be at least one group"
        );
        self.number_of_capture_groups = number;
        self
    }

    /// Set the minimum number of symbols any match must span. Executors may
    /// use this to prune attempts that cannot possibly succeed.
    ///
    /// This is `0` by default.
    pub fn min_result_length(mut self, length: usize) -> Config {
        self.min_result_length = length;
        self
    }

    /// Return whether the automaton consumes its input left to right.
    #[inline]
    pub fn get_forward(&self) -> bool {
        self.forward
    }

    /// Return whether the automaton consumes its input right to left.
    #[inline]
    pub fn is_backward(&self) -> bool {
        !self.forward
    }

    /// Return whether the search is unanchored.
    #[inline]
    pub fn get_searching(&self) -> bool {
        self.searching
    }

    /// Return whether per-transition capture group tracking is enabled.
    #[inline]
    pub fn get_track_capture_groups(&self) -> bool {
        self.track_capture_groups
    }

    /// Return whether extra correctness assertions are enabled.
    #[inline]
    pub fn get_regression_test_mode(&self) -> bool {
        self.regression_test_mode
    }

    /// Return the total number of capture groups, including group 0.
    #[inline]
    pub fn get_number_of_capture_groups(&self) -> usize {
        self.number_of_capture_groups
    }

    /// Return the minimum number of symbols any match must span.
    #[inline]
    pub fn get_min_result_length(&self) -> usize {
        self.min_result_length
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn defaults_describe_the_forward_scanner() {
        let config = Config::new();
        assert!(config.get_forward());
        assert!(!config.is_backward());
        assert!(!config.get_searching());
        assert!(!config.get_track_capture_groups());
        assert!(!config.get_regression_test_mode());
        assert_eq!(1, config.get_number_of_capture_groups());
        assert_eq!(0, config.get_min_result_length());
        assert_eq!(Config::default(), config);
    }

    #[test]
    fn backward_is_the_negation_of_forward() {
        for &forward in &[true, false] {
            for &searching in &[true, false] {
                for &tracking in &[true, false] {
                    let config = Config::new()
                        .forward(forward)
                        .searching(searching)
                        .track_capture_groups(tracking);
                    assert_eq!(!forward, config.is_backward());
                }
            }
        }
    }

    #[test]
    fn configs_compare_by_value() {
        let first = Config::new().forward(false).number_of_capture_groups(4);
        let second = Config::new().number_of_capture_groups(4).forward(false);
        assert_eq!(first, second);
        assert_ne!(first, second.min_result_length(1));
    }

    #[test]
    #[should_panic]
    fn zero_capture_groups_is_rejected() {
        Config::new().number_of_capture_groups(0);
    }

    quickcheck! {
        fn prop_fields_round_trip(
            forward: bool,
            searching: bool,
            track_capture_groups: bool,
            regression_test_mode: bool,
            number_of_capture_groups: usize,
            min_result_length: usize
        ) -> bool {
            let number_of_capture_groups = number_of_capture_groups.max(1);
            let config = Config::new()
                .forward(forward)
                .searching(searching)
                .track_capture_groups(track_capture_groups)
                .regression_test_mode(regression_test_mode)
                .number_of_capture_groups(number_of_capture_groups)
                .min_result_length(min_result_length);
            config.get_forward() == forward
                && config.is_backward() == !forward
                && config.get_searching() == searching
                && config.get_track_capture_groups() == track_capture_groups
                && config.get_regression_test_mode() == regression_test_mode
                && config.get_number_of_capture_groups()
                    == number_of_capture_groups
                && config.get_min_result_length() == min_result_length
        }
    }
}
