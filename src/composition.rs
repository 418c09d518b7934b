// Copyright 2025 Cowboy AI, LLC.

//! Compositions: the gap pattern of a combination read around the cycle.
//!
//! A composition of `n` is an ordered sequence of positive parts summing to
//! `n`. Rotating a combination so that its lowest member sits at `0` and
//! reading the distances between consecutive members (the last one wrapping
//! back to `n`) yields its composition.

use std::fmt::{self, Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::combination::Combination;
use crate::errors::{CombinationError, CombinationResult};

/// Ordered gap sequence over a cyclic universe of size `n`.
///
/// Either empty, or every part is positive and the parts sum to `n`.
/// Deserialization enforces the same rule as [`Composition::try_from_parts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "CompositionRepr")]
pub struct Composition {
    n: usize,
    parts: Vec<usize>,
}

/// Unchecked wire shape of a [`Composition`].
#[derive(Deserialize, JsonSchema)]
struct CompositionRepr {
    n: usize,
    parts: Vec<usize>,
}

impl TryFrom<CompositionRepr> for Composition {
    type Error = CombinationError;

    fn try_from(repr: CompositionRepr) -> Result<Self, Self::Error> {
        Self::try_from_parts(repr.n, repr.parts)
    }
}

impl Composition {
    /// The empty composition for universe size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            parts: Vec::new(),
        }
    }

    /// Build a composition from member flags at offsets `1..=mask.len()`.
    ///
    /// Offset `0` is always a member, so the universe size is
    /// `mask.len() + 1`.
    ///
    /// ```
    /// use cim_combination::Composition;
    ///
    /// let c = Composition::from_boolean_array(&[false, true, false]);
    /// assert_eq!(c.as_sequence(), &[2, 2]);
    /// ```
    pub fn from_boolean_array(mask: &[bool]) -> Self {
        let n = mask.len() + 1;
        let mut parts = Vec::new();
        let mut last = 0;
        for (j, &member) in mask.iter().enumerate() {
            if !member {
                continue;
            }
            let offset = j + 1;
            parts.push(offset - last);
            last = offset;
        }
        parts.push(n - last);
        Self { n, parts }
    }

    /// Composition of `n` from explicit parts.
    ///
    /// An empty `parts` is the empty composition. Otherwise every part must
    /// be positive and the parts must sum to exactly `n`.
    pub fn try_from_parts(n: usize, parts: Vec<usize>) -> CombinationResult<Self> {
        let invalid = |reason: String| CombinationError::InvalidComposition { n, reason };
        if let Some(pos) = parts.iter().position(|&part| part == 0) {
            return Err(invalid(format!("part {pos} is zero")));
        }
        let sum = parts
            .iter()
            .try_fold(0usize, |acc, &part| acc.checked_add(part))
            .ok_or_else(|| invalid("parts overflow".to_string()))?;
        if !parts.is_empty() && sum != n {
            return Err(invalid(format!("parts sum to {sum}")));
        }
        Ok(Self { n, parts })
    }

    /// Universe size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of parts.
    pub fn k(&self) -> usize {
        self.parts.len()
    }

    /// True when there are no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parts in order.
    pub fn as_sequence(&self) -> &[usize] {
        &self.parts
    }

    /// Largest part, if any.
    pub fn max_part(&self) -> Option<usize> {
        self.parts.iter().copied().max()
    }

    /// Rebuild the canonical combination (lowest member at `0`).
    ///
    /// Running offsets never exceed `n` since the parts sum to `n`.
    pub fn to_combination(&self) -> Combination {
        let mut offset = 0;
        let mut members = Vec::with_capacity(self.parts.len());
        for &part in &self.parts {
            members.push(offset);
            offset += part;
        }
        Combination::create_with_size_and_set(self.n, members)
    }
}

impl Display for Composition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{part}")?;
        }
        f.write_str(")")
    }
}
