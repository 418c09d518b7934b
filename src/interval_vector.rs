// Copyright 2025 Cowboy AI, LLC.

//! Interval-class content of a set of pitch classes.

use std::fmt::{self, Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Modulus used to fold intervals into interval classes.
pub const OCTAVE: usize = 12;

/// Number of distinct non-zero interval classes.
pub const INTERVAL_CLASSES: usize = OCTAVE / 2;

/// Histogram of interval classes 1 through 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct IntervalVector([usize; INTERVAL_CLASSES]);

impl IntervalVector {
    /// Count the interval class of every unordered pair of pitch classes.
    pub fn from_pitch_classes(pitch_classes: &[usize]) -> Self {
        Self(calc_interval_vector(pitch_classes))
    }

    /// Raw counts, index `0` holding interval class 1.
    pub fn counts(&self) -> [usize; INTERVAL_CLASSES] {
        self.0
    }

    /// Count for interval class `ic` (1..=6); zero outside that range.
    pub fn get(&self, ic: usize) -> usize {
        match ic {
            1..=INTERVAL_CLASSES => self.0[ic - 1],
            _ => 0,
        }
    }

    /// Number of counted pairs.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl From<IntervalVector> for [usize; INTERVAL_CLASSES] {
    fn from(iv: IntervalVector) -> Self {
        iv.0
    }
}

impl Display for IntervalVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|&c| c < 10) {
            f.write_str("<")?;
            for c in self.0 {
                write!(f, "{c}")?;
            }
            return f.write_str(">");
        }
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "<{}>", parts.join(","))
    }
}

/// Pure helper: six-entry interval-class histogram of `pitch_classes`.
///
/// Pairs folding to interval class 0 (unisons and octave duplicates) are not
/// counted.
pub fn calc_interval_vector(pitch_classes: &[usize]) -> [usize; INTERVAL_CLASSES] {
    let mut counts = [0usize; INTERVAL_CLASSES];
    for (i, &a) in pitch_classes.iter().enumerate() {
        for &b in &pitch_classes[i + 1..] {
            let d = a.abs_diff(b) % OCTAVE;
            let ic = d.min(OCTAVE - d);
            if ic > 0 {
                counts[ic - 1] += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[0, 4, 7], [0, 0, 1, 1, 1, 0] ; "major triad")]
    #[test_case(&[0, 3, 7], [0, 0, 1, 1, 1, 0] ; "minor triad")]
    #[test_case(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], [12, 12, 12, 12, 12, 6] ; "aggregate")]
    #[test_case(&[0, 4, 8], [0, 0, 0, 3, 0, 0] ; "augmented")]
    #[test_case(&[0, 2, 4, 5, 7, 9, 11], [2, 5, 4, 3, 6, 1] ; "diatonic")]
    #[test_case(&[], [0; 6] ; "empty")]
    #[test_case(&[5], [0; 6] ; "single")]
    fn test_calc_interval_vector(pcs: &[usize], expected: [usize; 6]) {
        assert_eq!(calc_interval_vector(pcs), expected);
    }

    #[test]
    fn test_octave_duplicates_not_counted() {
        assert_eq!(calc_interval_vector(&[0, 12]), [0; 6]);
        assert_eq!(calc_interval_vector(&[0, 13]), [1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_accessors_and_display() {
        let iv = IntervalVector::from_pitch_classes(&[0, 4, 7]);
        assert_eq!(iv.get(3), 1);
        assert_eq!(iv.get(0), 0);
        assert_eq!(iv.get(7), 0);
        assert_eq!(iv.total(), 3);
        assert_eq!(iv.to_string(), "<001110>");

        let aggregate: Vec<usize> = (0..12).collect();
        let iv = IntervalVector::from_pitch_classes(&aggregate);
        assert_eq!(iv.to_string(), "<12,12,12,12,12,6>");
        assert_eq!(iv.total(), 66);
    }

    #[test]
    fn test_serializes_as_array() {
        let iv = IntervalVector::from_pitch_classes(&[0, 4, 7]);
        assert_eq!(serde_json::to_string(&iv).unwrap(), "[0,0,1,1,1,0]");
        let back: IntervalVector = serde_json::from_str("[0,0,1,1,1,0]").unwrap();
        assert_eq!(back, iv);
    }
}
