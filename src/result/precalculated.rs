/// One statically known capture group layout, expressed relative to the end
/// of a match.
///
/// The pattern compiler proves that a pattern's capture groups can only land
/// in a handful of configurations and emits one of these per configuration.
/// Each entry records how far a group boundary sits *before* the match end,
/// with `-1` marking a group that does not participate in that shape. Given
/// a concrete end offset, [`materialize`](PreCalculatedResult::materialize)
/// turns the template into absolute offsets.
///
/// A shape is a pure value: it is owned by the compiled pattern, shared by
/// every result derived from it and never copied per result.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PreCalculatedResult {
    // Two entries per group, start before end, as distances from the match
    // end. -1 = group absent in this shape.
    indices: Box<[i32]>,
}

impl PreCalculatedResult {
    /// Create a shape for the given number of capture groups, with every
    /// group initially absent.
    ///
    /// # Panics
    ///
    /// This panics if `number_of_groups` is zero; group 0 always exists.
    pub fn new(number_of_groups: usize) -> PreCalculatedResult {
        assert!(
            number_of_groups >= 1,
            "a capture group layout always includes group 0"
        );
        PreCalculatedResult {
            indices: vec![-1; number_of_groups * 2].into_boxed_slice(),
        }
    }

    /// Return the number of capture groups in this shape.
    #[inline]
    pub fn number_of_groups(&self) -> usize {
        self.indices.len() / 2
    }

    /// Record the start boundary of a group as a distance from the match
    /// end.
    pub fn set_start(&mut self, group: usize, distance_from_end: i32) {
        assert!(
            distance_from_end >= 0,
            "distances from the end are never negative"
        );
        self.indices[group * 2] = distance_from_end;
    }

    /// Record the end boundary of a group as a distance from the match end.
    pub fn set_end(&mut self, group: usize, distance_from_end: i32) {
        assert!(
            distance_from_end >= 0,
            "distances from the end are never negative"
        );
        self.indices[group * 2 + 1] = distance_from_end;
    }

    /// Write the absolute offsets of this shape at the given match end into
    /// `target`. Absent groups stay `-1` regardless of `end`.
    ///
    /// # Panics
    ///
    /// This panics if `target` does not have exactly two slots per group.
    pub fn apply_relative_to_end(&self, target: &mut [i32], end: i32) {
        assert_eq!(
            self.indices.len(),
            target.len(),
            "target buffer must have one slot per group boundary"
        );
        for (slot, &distance) in target.iter_mut().zip(self.indices.iter()) {
            *slot = if distance < 0 { -1 } else { end - distance };
        }
    }

    /// Return a freshly allocated buffer of absolute offsets for this shape
    /// at the given match end.
    pub fn materialize(&self, end: i32) -> Box<[i32]> {
        let mut target = vec![0; self.indices.len()].into_boxed_slice();
        self.apply_relative_to_end(&mut target, end);
        target
    }
}
