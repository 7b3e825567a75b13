/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The lifecycle of a single asynchronous request as a tagged value.
//!
//! [`RemoteData<E, T>`] is exactly one of four states: the request has
//! not been made (`NotAsked`), it is in flight (`Loading`), it resolved
//! with an error (`Failure`), or it resolved with data (`Success`).
//! The type only tags the state; whether a transition is legal (for
//! example, retrying by moving `Failure` back to `Loading`) is the
//! caller's business.
//!
//! Transformations are tag-preserving by construction: [`map`] touches
//! only the `Success` payload and [`map_err`] only the `Failure`
//! payload, and neither can move a value between states. Only the
//! constructors decide tags.
//!
//! [`map`]: RemoteData::map
//! [`map_err`]: RemoteData::map_err

use enum_as_inner::EnumAsInner;
use serde::Deserialize;
use serde::Serialize;

/// The four mutually-exclusive states of an asynchronous request.
///
/// # Example
///
/// ```rust
/// use remotedata::RemoteData;
///
/// let pending: RemoteData<String, u32> = RemoteData::Loading;
/// assert!(pending.is_loading());
///
/// let resolved = RemoteData::<String, u32>::Success(2).map(|n| n * 21);
/// assert_eq!(resolved.success(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumAsInner)]
pub enum RemoteData<E, T> {
    /// The request has not been made yet.
    NotAsked,
    /// The request is in flight.
    Loading,
    /// The request resolved with an error.
    Failure(E),
    /// The request resolved with data.
    Success(T),
}

impl<E, T> RemoteData<E, T> {
    /// Transform the `Success` payload; identity on every other state.
    pub fn map<U, F>(self, f: F) -> RemoteData<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(error) => RemoteData::Failure(error),
            RemoteData::Success(data) => RemoteData::Success(f(data)),
        }
    }

    /// Transform the `Failure` payload; identity on every other state.
    pub fn map_err<F2, F>(self, f: F) -> RemoteData<F2, T>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(error) => RemoteData::Failure(f(error)),
            RemoteData::Success(data) => RemoteData::Success(data),
        }
    }

    /// Chain a `Success`-dependent computation; identity on every other
    /// state.
    pub fn and_then<U, F>(self, f: F) -> RemoteData<E, U>
    where
        F: FnOnce(T) -> RemoteData<E, U>,
    {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(error) => RemoteData::Failure(error),
            RemoteData::Success(data) => f(data),
        }
    }

    /// The `Success` payload, if the request has succeeded.
    pub fn success(self) -> Option<T> {
        match self {
            RemoteData::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The `Failure` payload, if the request has failed.
    pub fn failure(self) -> Option<E> {
        match self {
            RemoteData::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// The `Success` payload, or `default` in every other state.
    pub fn unwrap_or(self, default: T) -> T {
        self.success().unwrap_or(default)
    }

    /// The `Success` payload, or the result of `f` in every other state.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.success().unwrap_or_else(f)
    }

    /// Whether the request has resolved, successfully or not.
    pub fn is_resolved(&self) -> bool {
        matches!(self, RemoteData::Failure(_) | RemoteData::Success(_))
    }
}

/// A resolved `Result` is a resolved request: `Ok` becomes `Success`
/// and `Err` becomes `Failure`.
impl<E, T> From<Result<T, E>> for RemoteData<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => RemoteData::Success(data),
            Err(error) => RemoteData::Failure(error),
        }
    }
}

/// A request starts out un-asked.
impl<E, T> Default for RemoteData<E, T> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}
