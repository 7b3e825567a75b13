/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Foundational algebraic data type helpers.
//!
//! This crate supplies the small, pure building blocks the rest of the
//! workspace composes: stable-order partitioning of result streams,
//! per-slot tuple transforms, a structurally non-empty vector, and
//! nominal branding for otherwise-interchangeable values. Every
//! operation is a total transformation over an owned value; there is no
//! I/O, no shared state, and no panic path in library code.
//!
//! # Quick Start
//!
//! ```rust
//! use adt::NonEmptyVec;
//! use adt::PairExt;
//! use adt::partition;
//!
//! // Split a stream of results, preserving encounter order per group.
//! let (oks, errs) = partition(vec![Ok(1), Err("a"), Ok(2), Err("b")]);
//! assert_eq!(oks, vec![1, 2]);
//! assert_eq!(errs, vec!["a", "b"]);
//!
//! // Transform tuple slots independently.
//! assert_eq!((1, "one").map_first(|n| n + 1), (2, "one"));
//!
//! // A vector that cannot be empty.
//! let mut items = NonEmptyVec::singleton(1);
//! items.push(2);
//! assert_eq!(*items.last(), 2);
//! ```
//!
//! # Core Concepts
//!
//! - **Result**: `std::result::Result` is the ok/err tagged union;
//!   [`partition`] and [`PartitionResults`] add the stable-order split
//!   the standard library lacks.
//!
//! - **Option as Maybe**: optional values are plain `Option<T>` — the
//!   explicit two-case union means "absent" can never collide with a
//!   legitimate value (`Option<Option<T>>` nests without collapse).
//!   This crate deliberately adds no wrapper over `Option`; `Some`,
//!   `None`, `Option::map`, and `Result::ok` already cover the optional
//!   value algebra.
//!
//! - **Pairs**: [`PairExt`] extends native `(A, B)` tuples with
//!   `map_first`/`map_second`/`bimap`/`swap`.
//!
//! - **Non-empty sequences**: [`NonEmptyVec`] stores a mandatory head
//!   plus a possibly-empty tail, so `len() >= 1` holds by construction
//!   through every transformation.
//!
//! - **Branding**: [`Opaque<T, B>`] is a nominal wrapper whose brand
//!   parameter distinguishes values that share a representation but not
//!   a meaning.

mod nonempty;
mod opaque;
mod pair;
mod result;

pub use nonempty::EmptyVecError;
pub use nonempty::NonEmptyVec;
pub use opaque::Opaque;
pub use pair::PairExt;
pub use result::PartitionResults;
pub use result::partition;
