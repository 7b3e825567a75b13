/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Tagged request-lifecycle values for asynchronous data.
//!
//! An asynchronous request is always in exactly one of four states:
//! not yet made, in flight, failed, or succeeded. [`RemoteData`] makes
//! that state a value, so application code matches on it instead of
//! juggling `is_loading` booleans and nullable payloads. For paginated
//! collections, [`RemotePaginate`] layers a page-ordered list, an
//! incremental-fetch status, and optional metadata on top of the same
//! lifecycle.
//!
//! # Quick Start
//!
//! ```rust
//! use remotedata::PageStatus;
//! use remotedata::RemoteData;
//! use remotedata::RemotePaginate;
//!
//! // A request lifecycle, tagged.
//! let users: RemoteData<String, Vec<&str>> = RemoteData::Success(vec!["ada"]);
//! assert_eq!(users.map(|u| u.len()), RemoteData::Success(1));
//!
//! // A paginated collection; operations are no-ops until the initial
//! // load has succeeded, so no state check is needed at call sites.
//! let page: RemotePaginate<String, u32, ()> =
//!     RemotePaginate::paginated(vec![1, 2], PageStatus::Loaded, None);
//! let page = page.append(vec![3]).map_value(|n| n * 2);
//! assert_eq!(page.success().unwrap().value, vec![2, 4, 6]);
//! ```
//!
//! All values here are plain immutable data: transformations consume
//! their input and return a new value, nothing is shared, and sharing
//! `&RemoteData` across threads needs no synchronization.

mod paginate;
mod remote_data;

pub use paginate::PageStatus;
pub use paginate::Paginate;
pub use paginate::RemotePaginate;
pub use remote_data::RemoteData;
