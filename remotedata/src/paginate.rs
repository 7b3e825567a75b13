/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Paginated collections layered over [`RemoteData`].
//!
//! A [`Paginate`] record is the accumulated pages of a collection: the
//! elements in page order, an incremental-fetch status, and optional
//! caller-defined metadata (a cursor, a total count). Wrapping it in
//! [`RemoteData`] yields [`RemotePaginate`]: the list exists only once
//! the initial request has succeeded. Errors during a "load more" are
//! carried in the status ([`PageStatus::Error`] by default), not by
//! flipping the outer value to `Failure` — `Failure` is reserved for
//! the initial load.
//!
//! Every operation on the outer type short-circuits to return its input
//! unchanged unless the state is `Success`, so callers can append,
//! prepend, and map without checking the state first.

use enum_as_inner::EnumAsInner;
use serde::Deserialize;
use serde::Serialize;

use crate::RemoteData;

/// Progress of an incremental fetch over an already-loaded collection.
///
/// This is the default status type; callers may substitute any status
/// of their own through the `S` parameter of [`Paginate`], which the
/// operations here treat as fully opaque.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumAsInner)]
pub enum PageStatus<E> {
    /// The most recent page fetch completed.
    Loaded,
    /// A further page fetch is in flight.
    LoadingMore,
    /// A further page fetch failed.
    Error(E),
    /// The collection is exhausted.
    NoMore,
}

/// Accumulated pages of a collection.
///
/// `value` is ordered: append/prepend position encodes page order.
/// `meta` is whatever the caller needs to carry alongside (a cursor, a
/// total count); absence is `None`, never an in-band sentinel value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paginate<T, S, M> {
    /// Elements accumulated so far, in page order.
    pub value: Vec<T>,
    /// Status of the incremental fetch.
    pub status: S,
    /// Optional caller-defined metadata.
    pub meta: Option<M>,
}

/// A paginated collection that exists only after its initial request
/// has succeeded at least once.
pub type RemotePaginate<E, T, M, S = PageStatus<E>> = RemoteData<E, Paginate<T, S, M>>;

impl<T, S, M> Paginate<T, S, M> {
    /// A page record with no metadata.
    pub fn new(value: Vec<T>, status: S) -> Self {
        Self {
            value,
            status,
            meta: None,
        }
    }

    /// Attach metadata.
    pub fn with_meta(mut self, meta: M) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Transform every element in page order; status and meta untouched.
    pub fn map_value<U, F>(self, f: F) -> Paginate<U, S, M>
    where
        F: FnMut(T) -> U,
    {
        Paginate {
            value: self.value.into_iter().map(f).collect(),
            status: self.status,
            meta: self.meta,
        }
    }

    /// Transform the metadata if present; value and status untouched.
    pub fn map_meta<N, F>(self, f: F) -> Paginate<T, S, N>
    where
        F: FnOnce(M) -> N,
    {
        Paginate {
            value: self.value,
            status: self.status,
            meta: self.meta.map(f),
        }
    }

    /// Transform the status; value and meta untouched.
    pub fn map_status<R, F>(self, f: F) -> Paginate<T, R, M>
    where
        F: FnOnce(S) -> R,
    {
        Paginate {
            value: self.value,
            status: f(self.status),
            meta: self.meta,
        }
    }

    /// Add `items` after the existing elements, preserving order.
    pub fn append<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.value.extend(items);
        self
    }

    /// Add `items` before the existing elements, preserving order.
    pub fn prepend<I>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut value: Vec<T> = items.into_iter().collect();
        value.extend(self.value);
        Paginate {
            value,
            status: self.status,
            meta: self.meta,
        }
    }
}

/// Pagination operations on the wrapped collection.
///
/// Each of these is the identity whenever the outer state is
/// `NotAsked`, `Loading`, or `Failure`, so they are always safe to call
/// without inspecting the state.
impl<E, T, S, M> RemoteData<E, Paginate<T, S, M>> {
    /// A successfully-loaded paginated collection.
    pub fn paginated(value: Vec<T>, status: S, meta: Option<M>) -> Self {
        RemoteData::Success(Paginate {
            value,
            status,
            meta,
        })
    }

    /// Transform every element of the loaded collection in page order.
    pub fn map_value<U, F>(self, f: F) -> RemoteData<E, Paginate<U, S, M>>
    where
        F: FnMut(T) -> U,
    {
        self.map(|page| page.map_value(f))
    }

    /// Transform the metadata of the loaded collection, when present.
    pub fn map_meta<N, F>(self, f: F) -> RemoteData<E, Paginate<T, S, N>>
    where
        F: FnOnce(M) -> N,
    {
        self.map(|page| page.map_meta(f))
    }

    /// Transform the status of the loaded collection.
    pub fn map_status<R, F>(self, f: F) -> RemoteData<E, Paginate<T, R, M>>
    where
        F: FnOnce(S) -> R,
    {
        self.map(|page| page.map_status(f))
    }

    /// Add `items` after the loaded elements.
    pub fn append<I>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.map(|page| page.append(items))
    }

    /// Add `items` before the loaded elements.
    pub fn prepend<I>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.map(|page| page.prepend(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestPaginate = RemotePaginate<String, i64, String>;

    #[test]
    fn paginated_is_always_success() {
        let remote = TestPaginate::paginated(vec![1, 2], PageStatus::Loaded, None);
        assert_eq!(
            remote,
            RemoteData::Success(Paginate::new(vec![1, 2], PageStatus::Loaded))
        );
    }

    #[test]
    fn append_then_map_value() {
        let remote = TestPaginate::paginated(vec![1, 2], PageStatus::Loaded, None)
            .append(vec![3])
            .map_value(|n| n * 2);
        assert_eq!(
            remote,
            RemoteData::Success(Paginate {
                value: vec![2, 4, 6],
                status: PageStatus::Loaded,
                meta: None,
            })
        );
    }

    #[test]
    fn prepend_puts_items_first() {
        let remote = TestPaginate::paginated(vec![3, 4], PageStatus::Loaded, None).prepend(vec![1, 2]);
        assert_eq!(
            remote.success().map(|page| page.value),
            Some(vec![1, 2, 3, 4])
        );
    }

    #[test]
    fn operations_are_identity_off_success() {
        for remote in [
            TestPaginate::NotAsked,
            TestPaginate::Loading,
            TestPaginate::Failure("initial load failed".to_string()),
        ] {
            assert_eq!(remote.clone().append(vec![1]), remote);
            assert_eq!(remote.clone().prepend(vec![1]), remote);
            assert_eq!(remote.clone().map_value(|n| n * 2), remote);
            assert_eq!(
                remote.clone().map_status(|s| s),
                remote
            );
            assert_eq!(
                remote.clone().map_meta(|m: String| m),
                remote
            );
        }
    }

    #[test]
    fn map_meta_skips_only_true_absence() {
        let tag = |m: String| format!("cursor:{}", m);

        let absent = TestPaginate::paginated(vec![1], PageStatus::Loaded, None).map_meta(tag);
        assert_eq!(absent.success().and_then(|page| page.meta), None);

        // An empty string is present metadata, not absence.
        let falsy = TestPaginate::paginated(vec![1], PageStatus::Loaded, Some(String::new()))
            .map_meta(tag);
        assert_eq!(
            falsy.success().and_then(|page| page.meta),
            Some("cursor:".to_string())
        );
    }

    #[test]
    fn map_status_leaves_value_and_meta() {
        let remote =
            TestPaginate::paginated(vec![1], PageStatus::LoadingMore, Some("c1".to_string()))
                .map_status(|_| PageStatus::<String>::NoMore);
        let page = remote.success().unwrap();
        assert_eq!(page.value, vec![1]);
        assert_eq!(page.meta, Some("c1".to_string()));
        assert_eq!(page.status, PageStatus::NoMore);
    }

    #[test]
    fn load_more_errors_live_in_the_status() {
        // The outer value stays Success; only the status records the
        // failed incremental fetch.
        let remote = TestPaginate::paginated(vec![1, 2], PageStatus::Loaded, None)
            .map_status(|_| PageStatus::Error("page 2 timed out".to_string()));
        assert!(remote.is_success());
        let page = remote.success().unwrap();
        assert_eq!(page.value, vec![1, 2]);
        assert!(page.status.is_error());
    }

    #[test]
    fn custom_status_types_are_opaque() {
        #[derive(Clone, Debug, PartialEq, Eq)]
        struct Cursor(u64);

        let remote: RemotePaginate<String, i64, (), Cursor> =
            RemoteData::paginated(vec![1], Cursor(9), None);
        let advanced = remote.map_status(|Cursor(n)| Cursor(n + 1));
        assert_eq!(advanced.success().unwrap().status, Cursor(10));
    }

    #[test]
    fn serde_roundtrip() {
        let remote = TestPaginate::paginated(
            vec![1, 2, 3],
            PageStatus::Error("e".to_string()),
            Some("cursor".to_string()),
        );
        let encoded = bincode::serialize(&remote).unwrap();
        let decoded: TestPaginate = bincode::deserialize(&encoded).unwrap();
        assert_eq!(remote, decoded);
    }
}
