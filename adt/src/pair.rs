/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Per-slot transformations for two-element tuples.
//!
//! A native `(A, B)` tuple is the fixed two-slot ordered pair; this
//! module extends it with independent per-slot transformation, in the
//! same way the lattice traits are blanket-implemented for standard
//! library types elsewhere in this workspace.

/// Independent per-slot transformation of an `(A, B)` pair.
///
/// Every method consumes the pair and returns a new one; slot order is
/// preserved (except by [`swap`](PairExt::swap), whose purpose is the
/// reorder).
///
/// # Example
///
/// ```rust
/// use adt::PairExt;
///
/// let pair = (2, "two");
/// assert_eq!(pair.map_first(|n| n * 10), (20, "two"));
/// assert_eq!(pair.map_second(str::len), (2, 3));
/// assert_eq!(pair.bimap(|n| n + 1, str::to_uppercase), (3, "TWO".to_string()));
/// ```
pub trait PairExt<A, B>: Sized {
    /// Transform the first slot, leaving the second untouched.
    fn map_first<C, F>(self, f: F) -> (C, B)
    where
        F: FnOnce(A) -> C;

    /// Transform the second slot, leaving the first untouched.
    fn map_second<C, F>(self, f: F) -> (A, C)
    where
        F: FnOnce(B) -> C;

    /// Transform both slots independently.
    fn bimap<C, D, F, G>(self, f: F, g: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Exchange the two slots.
    fn swap(self) -> (B, A);
}

impl<A, B> PairExt<A, B> for (A, B) {
    fn map_first<C, F>(self, f: F) -> (C, B)
    where
        F: FnOnce(A) -> C,
    {
        (f(self.0), self.1)
    }

    fn map_second<C, F>(self, f: F) -> (A, C)
    where
        F: FnOnce(B) -> C,
    {
        (self.0, f(self.1))
    }

    fn bimap<C, D, F, G>(self, f: F, g: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (f(self.0), g(self.1))
    }

    fn swap(self) -> (B, A) {
        (self.1, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_first_leaves_second_slot() {
        assert_eq!((1, "a").map_first(|n| n + 1), (2, "a"));
    }

    #[test]
    fn map_second_leaves_first_slot() {
        assert_eq!((1, "a").map_second(|s: &str| s.len()), (1, 1));
    }

    #[test]
    fn bimap_is_map_first_then_map_second() {
        let pair = (3, 4);
        assert_eq!(
            pair.bimap(|a| a * 2, |b| b * 3),
            pair.map_first(|a| a * 2).map_second(|b| b * 3)
        );
    }

    #[test]
    fn swap_is_involutive() {
        assert_eq!((1, "a").swap().swap(), (1, "a"));
    }

    #[test]
    fn slots_may_change_type() {
        let pair: (u8, bool) = (7, true);
        let mapped: (String, u64) = pair.bimap(|n| n.to_string(), u64::from);
        assert_eq!(mapped, ("7".to_string(), 1));
    }
}
