// Copyright 2025 Cowboy AI, LLC.

//! # CIM Combination
//!
//! Finite subsets of a cyclic integer universe of size `n`, modelled as
//! fixed-width bit vectors. With `n = 12` these are the pitch-class sets of
//! musical set theory.
//!
//! This crate provides:
//! - **Combination**: a bit vector of width `n` with `k` members, plus the
//!   operations that treat it as a cyclic object (rotation, normal form)
//! - **Composition**: the gap pattern between consecutive members
//! - **IntervalVector**: the interval-class histogram of a set
//! - **Set algebra**: union, intersection, difference, symmetric difference
//!   across universes of differing size
//!
//! ## Design Principles
//!
//! 1. **Immutability**: every operation returns a new value
//! 2. **Totality**: set algebra never fails on width mismatch; widths are
//!    truncated or zero-padded per operation
//! 3. **Lenient input**: binary strings never fail to parse
//!
//! ```
//! use cim_combination::Combination;
//!
//! let triad = Combination::create_with_size_and_set(12, [0, 4, 7]);
//! assert_eq!(triad.to_string(), "{0, 4, 7}");
//! assert_eq!(triad.composition().as_sequence(), &[4, 3, 5]);
//! assert_eq!(triad.interval_vector().to_string(), "<001110>");
//! ```

#![warn(missing_docs)]

mod combination;
mod composition;
mod errors;
mod interval_vector;

// Re-export core types
pub use combination::{Combination, CHROMATIC_SIZE};
pub use composition::Composition;
pub use errors::{CombinationError, CombinationResult};
pub use interval_vector::{calc_interval_vector, IntervalVector, INTERVAL_CLASSES, OCTAVE};
