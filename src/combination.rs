// Copyright 2025 Cowboy AI, LLC.

//! Combinations: subsets of a cyclic universe `{0, 1, …, n-1}`.
//!
//! A [`Combination`] is a fixed-width bit vector with `k` bits set, treated as
//! a cyclic combinatorial object. With `n = 12` it is a pitch-class set and
//! rotation is musical transposition. Every operation returns a new value;
//! the underlying bits are only written while a value is being built.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Sub};
use std::str::FromStr;

use bitvec::prelude::*;
use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::composition::Composition;
use crate::errors::{CombinationError, CombinationResult};
use crate::interval_vector::IntervalVector;

/// Size of the chromatic universe.
pub const CHROMATIC_SIZE: usize = 12;

/// Membership bits, index `i` stored at bit `i`.
type Bits = BitVec<u64, Lsb0>;

/// A subset of the cyclic universe `{0, 1, …, n-1}`.
///
/// `n` is fixed for the lifetime of the value; `k` (the cardinality) is
/// derived from the bits. Serialized as its binary string, e.g. `"100010010000"`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Combination {
    bits: Bits,
}

impl Combination {
    /// Empty combination in a universe of size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 0; n],
        }
    }

    /// Empty combination in the 12-tone universe.
    pub fn chromatic() -> Self {
        Self::new(CHROMATIC_SIZE)
    }

    /// Empty combination for a size supplied as a signed integer.
    ///
    /// Negative sizes are rejected rather than clamped.
    pub fn try_with_size(n: i64) -> CombinationResult<Self> {
        match usize::try_from(n) {
            Ok(n) => Ok(Self::new(n)),
            Err(_) => {
                warn!(size = n, "rejecting invalid universe size");
                Err(CombinationError::InvalidSize { size: n })
            }
        }
    }

    /// Bit `i` is set iff `mask[i]`; the width is `mask.len()`.
    pub fn from_boolean_array(mask: &[bool]) -> Self {
        Self {
            bits: mask.iter().copied().collect(),
        }
    }

    /// Parse a binary string such as `"100010010000"`.
    ///
    /// Surrounding whitespace is trimmed. Any character other than `'0'`
    /// marks a member, so parsing never fails.
    ///
    /// ```
    /// use cim_combination::Combination;
    ///
    /// let c = Combination::from_binary_string("1x01");
    /// assert_eq!(c.as_sequence(), vec![0, 1, 3]);
    /// ```
    pub fn from_binary_string(s: &str) -> Self {
        let bits = s
            .trim()
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if ch != '0' && ch != '1' {
                    trace!(index = i, character = %ch, "treating non-binary character as a member");
                }
                ch != '0'
            })
            .collect();
        Self { bits }
    }

    /// Width `n` with the given members; indices `>= n` are ignored.
    pub fn create_with_size_and_set<I>(n: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut out = Self::new(n);
        for i in indices.into_iter().filter(|&i| i < n) {
            out.bits.set(i, true);
        }
        out
    }

    /// Universe size.
    pub fn n(&self) -> usize {
        self.bits.len()
    }

    /// Number of members; always equal to [`cardinality`](Self::cardinality).
    pub fn k(&self) -> usize {
        self.cardinality()
    }

    /// Number of members.
    pub fn cardinality(&self) -> usize {
        self.bits.count_ones()
    }

    /// True when there are no members.
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// True when `i` is a member. Indices outside the universe are never members.
    pub fn contains(&self, i: usize) -> bool {
        self.bits.get(i).is_some_and(|bit| *bit)
    }

    /// Smallest member `>= from`, or `None`.
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        let tail = self.bits.get(from..)?;
        tail.first_one().map(|i| i + from)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Cyclic transposition: every member `x` moves to `(x + t) mod n`.
    ///
    /// `t` may be any value, including negative or larger than `n`.
    ///
    /// ```
    /// use cim_combination::Combination;
    ///
    /// let c = Combination::create_with_size_and_set(12, [0, 4, 7]);
    /// assert_eq!(c.rotate(7).as_sequence(), vec![2, 7, 11]);
    /// assert_eq!(c.rotate(-12), c);
    /// ```
    pub fn rotate(&self, t: i64) -> Self {
        let n = self.n();
        if n == 0 || self.is_empty() {
            return self.clone();
        }
        let shift = i128::from(t).rem_euclid(n as i128) as usize;
        let mut bits = self.bits.clone();
        bits.rotate_right(shift);
        Self { bits }
    }

    /// Gap pattern after rotating the lowest member to `0`.
    ///
    /// The empty combination yields the empty composition of size `n`.
    pub fn composition(&self) -> Composition {
        let Some(first) = self.bits.first_one() else {
            return Composition::new(self.n());
        };
        let rotated = self.rotate(-(first as i64));
        let mask: Vec<bool> = rotated.bits[1..].iter().by_vals().collect();
        Composition::from_boolean_array(&mask)
    }

    /// Smallest cyclic window, starting at a member, that holds every member:
    /// `n` minus the largest gap of the composition.
    ///
    /// A single member has span `0`. The empty combination has no span and
    /// yields [`CombinationError::UndefinedSpan`].
    pub fn calc_span(&self) -> CombinationResult<usize> {
        let n = self.n();
        match self.composition().max_part() {
            Some(widest) => Ok(n - widest),
            None => {
                debug!(n, "span requested for an empty combination");
                Err(CombinationError::UndefinedSpan { n })
            }
        }
    }

    /// Interval-class histogram of the members.
    pub fn interval_vector(&self) -> IntervalVector {
        IntervalVector::from_pitch_classes(&self.as_sequence())
    }

    /// Members of both, over the shorter of the two universes.
    pub fn intersect(&self, other: &Self) -> Self {
        let width = self.n().min(other.n());
        let mut bits = self.resized(width);
        bits &= &other.bits[..width];
        Self { bits }
    }

    /// Members of `self` not in `other`; keeps the width of `self`.
    pub fn minus(&self, other: &Self) -> Self {
        let mut bits = self.bits.clone();
        bits &= (!other.resized(self.n())).as_bitslice();
        Self { bits }
    }

    /// Members of either, over the longer of the two universes.
    pub fn merge(a: &Self, b: &Self) -> Self {
        let width = a.n().max(b.n());
        let mut bits = a.resized(width);
        bits |= b.resized(width).as_bitslice();
        Self { bits }
    }

    /// Shorthand for [`Combination::merge`]`(self, other)`.
    pub fn merge_with(&self, other: &Self) -> Self {
        Self::merge(self, other)
    }

    /// Members of exactly one, over the longer of the two universes.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let width = self.n().max(other.n());
        let mut bits = self.resized(width);
        bits ^= other.resized(width).as_bitslice();
        Self { bits }
    }

    /// Exactly `n` characters, `'1'` for members and `'0'` otherwise.
    pub fn to_binary_string(&self) -> String {
        self.bits
            .iter()
            .by_vals()
            .map(|bit| if bit { '1' } else { '0' })
            .collect()
    }

    /// Members in ascending order.
    pub fn as_sequence(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Members as an unordered set.
    pub fn as_set(&self) -> HashSet<usize> {
        self.iter().collect()
    }

    /// Members separated by single spaces, e.g. `"0 4 7"`.
    pub fn combination_string(&self) -> String {
        self.iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Copy of the bits truncated or zero-padded to `width`.
    fn resized(&self, width: usize) -> Bits {
        let mut bits = self.bits.clone();
        bits.resize(width, false);
        bits
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (pos, i) in self.iter().enumerate() {
            if pos > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{i}")?;
        }
        f.write_str("}")
    }
}

impl Debug for Combination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combination")
            .field("n", &self.n())
            .field("members", &self.as_sequence())
            .finish()
    }
}

/// Orders by universe size, then by bits read from index `0` with
/// non-members first (the order of the binary strings).
impl Ord for Combination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.n()
            .cmp(&other.n())
            .then_with(|| self.bits.as_bitslice().cmp(other.bits.as_bitslice()))
    }
}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Combination {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_binary_string(s))
    }
}

impl From<&str> for Combination {
    fn from(s: &str) -> Self {
        Self::from_binary_string(s)
    }
}

impl From<String> for Combination {
    fn from(s: String) -> Self {
        Self::from_binary_string(&s)
    }
}

impl From<Combination> for String {
    fn from(c: Combination) -> Self {
        c.to_binary_string()
    }
}

/// Always serialized as `'0'`/`'1'` characters. Deserialization is lenient
/// and reads any other character as a member, so no pattern is enforced.
impl JsonSchema for Combination {
    fn schema_name() -> String {
        "Combination".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        let mut schema = SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            ..Default::default()
        };
        schema.metadata().description = Some(
            "Binary membership string; any character other than '0' reads as a member"
                .to_string(),
        );
        schema.into()
    }
}

impl BitOr for &Combination {
    type Output = Combination;

    fn bitor(self, rhs: Self) -> Combination {
        Combination::merge(self, rhs)
    }
}

impl BitAnd for &Combination {
    type Output = Combination;

    fn bitand(self, rhs: Self) -> Combination {
        self.intersect(rhs)
    }
}

impl BitXor for &Combination {
    type Output = Combination;

    fn bitxor(self, rhs: Self) -> Combination {
        self.symmetric_difference(rhs)
    }
}

impl Sub for &Combination {
    type Output = Combination;

    fn sub(self, rhs: Self) -> Combination {
        self.minus(rhs)
    }
}
