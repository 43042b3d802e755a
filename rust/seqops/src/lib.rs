//! Utilities for ordered sequences and keyed sequences.
//!
//! This crate provides small, allocation-light helpers for the manipulations
//! that come up constantly when shuffling loosely structured data around:
//! uniqueness-aware appends, value-based removal, separator interspersing,
//! consecutive pairs, keyed accumulation maps and index construction.
//!
//! # Key Types
//!
//! - [`VecExt`] - in-place vector mutation: `push_unique`, `push_all`,
//!   `push_all_unique`, `remove_first`, `remove_all`
//! - [`Sequence`] - uniform read-only access over slices, vectors and
//!   *optional* slices, so absent input is an ordinary, handled case
//! - [`MultiMapExt`] - "field array" accumulation on `HashMap<K, Vec<V>>`,
//!   with drained keys removed rather than left holding empty vectors
//! - [`build_index`] / [`build_index_unique`] - group elements of a
//!   sequence under an extracted key
//! - [`OneOrMany`] - normalization of "one value or a list" inputs
//! - [`split_by_comma`] - comma splitting that trims only the spaces
//!   directly around each comma
//!
//! Every operation is synchronous and holds no internal state; absent and
//! empty collections are valid inputs everywhere, never errors.

pub mod index;
pub mod multi_map;
pub mod one_or_many;
pub mod sequence;
pub mod split;
pub mod vec_ext;

pub use index::{build_index, build_index_unique};
pub use multi_map::{MapExt, MultiMapExt};
pub use one_or_many::{OneOrMany, Truthy, to_vec};
pub use sequence::Sequence;
pub use split::split_by_comma;
pub use vec_ext::VecExt;
